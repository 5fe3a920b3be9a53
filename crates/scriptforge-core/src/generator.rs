//! Unity movement snippet generation
//!
//! Maps a [`GenerationConfig`] to a finished C# source listing. The snippet
//! is assembled line by line from the config record, so no placeholder
//! token can ever leak into the output. Pure and total: identical configs
//! always yield byte-identical snippets.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// Class name used when the configurator field is blank
pub const DEFAULT_CLASS_NAME: &str = "MyFirstScript";

/// Scene dimensionality the generated script targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "2d")]
    TwoD,
    #[serde(rename = "3d")]
    ThreeD,
}

impl Dimension {
    /// Coerce a raw form value.
    ///
    /// Anything that is not exactly `"2d"` behaves as 3D; malformed values
    /// degrade instead of erroring.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "2d" {
            Dimension::TwoD
        } else {
            Dimension::ThreeD
        }
    }

    fn vector_type(self) -> &'static str {
        match self {
            Dimension::TwoD => "Vector2",
            Dimension::ThreeD => "Vector3",
        }
    }

    fn rigidbody_type(self) -> &'static str {
        match self {
            Dimension::TwoD => "Rigidbody2D",
            Dimension::ThreeD => "Rigidbody",
        }
    }

    fn up_vector(self) -> &'static str {
        match self {
            Dimension::TwoD => "Vector2.up",
            Dimension::ThreeD => "Vector3.up",
        }
    }

    /// The `move` vector built from the input axes. 2D reads only the
    /// horizontal axis; 3D adds the vertical axis as the z component.
    fn axis_read(self) -> String {
        let vec = self.vector_type();
        match self {
            Dimension::TwoD => {
                format!(r#"{vec} move = new {vec}(Input.GetAxis("Horizontal"), 0f);"#)
            }
            Dimension::ThreeD => format!(
                r#"{vec} move = new {vec}(Input.GetAxis("Horizontal"), 0f, Input.GetAxis("Vertical"));"#
            ),
        }
    }

    /// Velocity assignment that preserves the existing vertical component
    fn velocity_assign(self) -> String {
        let vec = self.vector_type();
        match self {
            Dimension::TwoD => format!("rb.velocity = new {vec}(move.x * speed, rb.velocity.y);"),
            Dimension::ThreeD => format!(
                "rb.velocity = new {vec}(move.x * speed, rb.velocity.y, move.z * speed);"
            ),
        }
    }

    // Translate always takes a Vector3, with a zero z in 2D.
    fn translate_vector(self) -> &'static str {
        match self {
            Dimension::TwoD => "new Vector3(move.x, 0f, 0f)",
            Dimension::ThreeD => "new Vector3(move.x, 0f, move.z)",
        }
    }
}

/// Movement strategy for the generated script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Rigidbody,
    Transform,
}

impl MovementKind {
    /// Coerce a raw form value. Anything that is not exactly `"rigidbody"`
    /// behaves as Transform movement.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "rigidbody" {
            MovementKind::Rigidbody
        } else {
            MovementKind::Transform
        }
    }
}

/// Options controlling code generation, constructed fresh per render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Name of the generated MonoBehaviour class
    pub class_name: String,

    /// Scene dimensionality
    pub dimension: Dimension,

    /// Movement strategy
    pub movement: MovementKind,

    /// Whether to append a jump block (Rigidbody movement only)
    pub enable_jump: bool,
}

impl GenerationConfig {
    pub fn new(
        class_name: impl Into<String>,
        dimension: Dimension,
        movement: MovementKind,
        enable_jump: bool,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            dimension,
            movement,
            enable_jump,
        }
    }
}

/// Render the movement script for `config`.
///
/// Total and pure: every config yields a well-formed listing. A blank or
/// whitespace-only class name falls back to [`DEFAULT_CLASS_NAME`]. The
/// jump block is silently omitted for Transform movement even when
/// requested; that is accepted policy, not an error.
pub fn render(config: &GenerationConfig) -> String {
    let name = effective_class_name(&config.class_name);
    let dim = config.dimension;
    let rigidbody = config.movement == MovementKind::Rigidbody;

    let mut out = String::new();
    let _ = writeln!(out, "using UnityEngine;");
    let _ = writeln!(out);
    let _ = writeln!(out, "public class {name} : MonoBehaviour");
    let _ = writeln!(out, "{{");
    let _ = writeln!(out, "    public float speed = 5f;");
    if rigidbody {
        let _ = writeln!(out, "    private {} rb;", dim.rigidbody_type());
    } else {
        // The field slot stays, empty, when no Rigidbody is needed.
        let _ = writeln!(out);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "    void Awake()");
    let _ = writeln!(out, "    {{");
    if rigidbody {
        let _ = writeln!(out, "        rb = GetComponent<{}>();", dim.rigidbody_type());
    } else {
        let _ = writeln!(out, "        // No Rigidbody required for Transform-based movement");
    }
    let _ = writeln!(out, "    }}");
    let _ = writeln!(out);

    let _ = writeln!(out, "    void Update()");
    let _ = writeln!(out, "    {{");
    if rigidbody {
        let _ = writeln!(out, "        // Read input and move using Rigidbody");
        let _ = writeln!(out, "        {}", dim.axis_read());
        let _ = writeln!(out, "        {}", dim.velocity_assign());
    } else {
        let _ = writeln!(out, "        // Read input and move using Transform");
        let _ = writeln!(out, "        {}", dim.axis_read());
        let _ = writeln!(
            out,
            "        transform.Translate({} * speed * Time.deltaTime);",
            dim.translate_vector()
        );
    }
    let _ = writeln!(out);
    if config.enable_jump && rigidbody {
        let _ = writeln!(out, "        // Simple jump");
        let _ = writeln!(out, "        if (Input.GetButtonDown(\"Jump\"))");
        let _ = writeln!(out, "        {{");
        let _ = writeln!(out, "            // NOTE: replace \"isGrounded\" with your own ground check");
        // Jump always uses ForceMode2D.Impulse, even for 3D scripts.
        let _ = writeln!(
            out,
            "            rb.AddForce({} * 5f, ForceMode2D.Impulse);",
            dim.up_vector()
        );
        let _ = writeln!(out, "        }}");
    }
    let _ = writeln!(out, "    }}");
    let _ = write!(out, "}}");
    out
}

fn effective_class_name(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_CLASS_NAME
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dimension: Dimension, movement: MovementKind, enable_jump: bool) -> GenerationConfig {
        GenerationConfig::new("Player", dimension, movement, enable_jump)
    }

    #[test]
    fn test_rigidbody_2d_with_jump_full_listing() {
        let config = config(Dimension::TwoD, MovementKind::Rigidbody, true);
        let expected = "\
using UnityEngine;

public class Player : MonoBehaviour
{
    public float speed = 5f;
    private Rigidbody2D rb;

    void Awake()
    {
        rb = GetComponent<Rigidbody2D>();
    }

    void Update()
    {
        // Read input and move using Rigidbody
        Vector2 move = new Vector2(Input.GetAxis(\"Horizontal\"), 0f);
        rb.velocity = new Vector2(move.x * speed, rb.velocity.y);

        // Simple jump
        if (Input.GetButtonDown(\"Jump\"))
        {
            // NOTE: replace \"isGrounded\" with your own ground check
            rb.AddForce(Vector2.up * 5f, ForceMode2D.Impulse);
        }
    }
}";
        assert_eq!(render(&config), expected);
    }

    #[test]
    fn test_transform_3d_full_listing() {
        let config = GenerationConfig::new("", Dimension::ThreeD, MovementKind::Transform, true);
        let expected = "\
using UnityEngine;

public class MyFirstScript : MonoBehaviour
{
    public float speed = 5f;


    void Awake()
    {
        // No Rigidbody required for Transform-based movement
    }

    void Update()
    {
        // Read input and move using Transform
        Vector3 move = new Vector3(Input.GetAxis(\"Horizontal\"), 0f, Input.GetAxis(\"Vertical\"));
        transform.Translate(new Vector3(move.x, 0f, move.z) * speed * Time.deltaTime);

    }
}";
        assert_eq!(render(&config), expected);
    }

    #[test]
    fn test_transform_never_contains_jump_block() {
        for dimension in [Dimension::TwoD, Dimension::ThreeD] {
            for enable_jump in [false, true] {
                let config = config(dimension, MovementKind::Transform, enable_jump);
                let snippet = render(&config);
                assert!(!snippet.contains("// Simple jump"), "jump leaked: {snippet}");
                assert!(!snippet.contains("AddForce"));
            }
        }
    }

    #[test]
    fn test_rigidbody_with_jump_contains_exactly_one_jump_block() {
        for dimension in [Dimension::TwoD, Dimension::ThreeD] {
            let config = config(dimension, MovementKind::Rigidbody, true);
            let snippet = render(&config);
            assert_eq!(snippet.matches("// Simple jump").count(), 1);
            assert_eq!(snippet.matches("rb.AddForce").count(), 1);
            assert!(snippet.contains("ForceMode2D.Impulse"));
        }
    }

    #[test]
    fn test_rigidbody_without_jump_has_no_jump_block() {
        let config = config(Dimension::TwoD, MovementKind::Rigidbody, false);
        assert!(!render(&config).contains("// Simple jump"));
    }

    #[test]
    fn test_render_is_referentially_transparent() {
        let a = config(Dimension::ThreeD, MovementKind::Rigidbody, true);
        let b = a.clone();
        assert_eq!(render(&a), render(&b));
    }

    #[test]
    fn test_blank_class_name_falls_back_to_default() {
        for raw in ["", "   ", "\t\n"] {
            let config =
                GenerationConfig::new(raw, Dimension::TwoD, MovementKind::Rigidbody, false);
            let snippet = render(&config);
            assert!(snippet.contains("public class MyFirstScript : MonoBehaviour"));
        }
    }

    #[test]
    fn test_class_name_is_trimmed() {
        let config =
            GenerationConfig::new("  Hero  ", Dimension::TwoD, MovementKind::Rigidbody, false);
        assert!(render(&config).contains("public class Hero : MonoBehaviour"));
    }

    #[test]
    fn test_2d_never_reads_the_vertical_axis() {
        for movement in [MovementKind::Rigidbody, MovementKind::Transform] {
            let config = config(Dimension::TwoD, movement, true);
            let snippet = render(&config);
            assert!(!snippet.contains("Vertical"));
            assert!(!snippet.contains("move.z"));
        }
    }

    #[test]
    fn test_3d_always_reads_the_vertical_axis() {
        for movement in [MovementKind::Rigidbody, MovementKind::Transform] {
            let config = config(Dimension::ThreeD, movement, false);
            let snippet = render(&config);
            assert!(snippet.contains(r#"Input.GetAxis("Vertical")"#));
            assert!(snippet.contains("move.z"));
        }
    }

    #[test]
    fn test_velocity_assignment_preserves_vertical_component() {
        let config = config(Dimension::ThreeD, MovementKind::Rigidbody, false);
        assert!(render(&config).contains("rb.velocity.y"));
    }

    #[test]
    fn test_dimension_from_raw_degrades_to_3d() {
        assert_eq!(Dimension::from_raw("2d"), Dimension::TwoD);
        assert_eq!(Dimension::from_raw("3d"), Dimension::ThreeD);
        assert_eq!(Dimension::from_raw("4d"), Dimension::ThreeD);
        assert_eq!(Dimension::from_raw(""), Dimension::ThreeD);
    }

    #[test]
    fn test_movement_from_raw_degrades_to_transform() {
        assert_eq!(MovementKind::from_raw("rigidbody"), MovementKind::Rigidbody);
        assert_eq!(MovementKind::from_raw("transform"), MovementKind::Transform);
        assert_eq!(MovementKind::from_raw("kinematic"), MovementKind::Transform);
    }
}
