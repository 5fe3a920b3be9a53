//! Static display data for the site pages
//!
//! Read-only records rendered into the home, community, and C# list pages.
//! Never mutated, never persisted.

/// A featured tutorial card on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialCard {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub image_url: &'static str,
}

/// A category card on the Unity community page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCard {
    pub title: &'static str,
    pub count_text: &'static str,
    pub href: &'static str,
}

/// A ranked post row on the Unity C# page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostRow {
    pub rank: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub rating: f64,
    pub href: &'static str,
}

/// Home: featured tutorials
pub const FEATURED_TUTORIALS: &[TutorialCard] = &[
    TutorialCard {
        title: "Unity Movement Script",
        description: "Move a player using Rigidbody and C# in Unity.",
        category: "Unity",
        image_url: "images/unity_movement.jpg",
    },
    TutorialCard {
        title: "Unreal Blueprint Basics",
        description: "Create gameplay logic visually with Blueprints.",
        category: "Unreal",
        image_url: "images/unreal_blueprint.jpg",
    },
    TutorialCard {
        title: "Unity Loop Examples",
        description: "for / while / foreach with practical samples.",
        category: "Unity",
        image_url: "images/unity_loops.jpg",
    },
    TutorialCard {
        title: "C++ Conditions in Unreal",
        description: "if / else and switch patterns for gameplay code.",
        category: "Unreal",
        image_url: "images/unreal_condition.jpg",
    },
    TutorialCard {
        title: "Shader Graph Tips",
        description: "Stylish materials with Unity\u{2019}s Shader Graph.",
        category: "Unity",
        image_url: "images/unity_shader.jpg",
    },
];

/// Unity community: category cards
pub const UNITY_CATEGORIES: &[CategoryCard] = &[
    CategoryCard {
        title: "C#",
        count_text: "387 list problems",
        href: "unity-csharp.html",
    },
    CategoryCard {
        title: "Loop",
        count_text: "234 list problems",
        href: "unity-csharp.html",
    },
    CategoryCard {
        title: "Condition",
        count_text: "198 list problems",
        href: "unity-csharp.html",
    },
];

/// Unity C#: ranked post rows
pub const CSHARP_POSTS: &[PostRow] = &[
    PostRow {
        rank: 1,
        title: "How to write your first C# code in Unity",
        excerpt: "Create a MonoBehaviour, print to Console, update transform\u{2026}",
        rating: 5.0,
        href: "unity-csharp-post.html",
    },
    PostRow {
        rank: 2,
        title: "Why am I getting a NullReferenceException?",
        excerpt: "Common causes and how to debug references and components\u{2026}",
        rating: 3.5,
        href: "unity-csharp-post.html",
    },
    PostRow {
        rank: 3,
        title: "Understanding Update vs FixedUpdate",
        excerpt: "Frame-based vs physics step timing, when to use each\u{2026}",
        rating: 4.0,
        href: "unity-csharp-post.html",
    },
];
