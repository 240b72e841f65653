// src/modules/schema/definitions.rs

use serde_json::json;

use super::types::{FieldDef, FieldKind, SchemaType};

pub fn schema_types() -> Vec<SchemaType> {
    vec![site_settings(), project(), post(), author(), category()]
}

/// Singleton document carrying the site identity and the CV data.
pub fn site_settings() -> SchemaType {
    SchemaType {
        name: "siteSettings",
        title: "Site Settings",
        fields: vec![
            FieldDef::new("siteTitle", "Site Title", FieldKind::String)
                .with_initial(json!("Amandeep Singh")),
            FieldDef::new("heroHeadline", "Hero Headline", FieldKind::String),
            FieldDef::new("heroSubtext", "Hero Subtext", FieldKind::Text),
            FieldDef::new("portrait", "Portrait Photo", FieldKind::Image),
            FieldDef::new("summary", "Summary (CV)", FieldKind::Text),
            FieldDef::new("about", "About (Long)", FieldKind::RichText),
            FieldDef::new(
                "contact",
                "Contact",
                FieldKind::Object {
                    fields: vec![
                        FieldDef::new("email", "Email", FieldKind::String),
                        FieldDef::new("phone", "Phone", FieldKind::String),
                        FieldDef::new("location", "Location", FieldKind::String),
                        FieldDef::new("githubUrl", "GitHub URL", FieldKind::Url),
                        FieldDef::new("linkedinUrl", "LinkedIn URL", FieldKind::Url),
                    ],
                },
            ),
            FieldDef::new("cvUrl", "CV PDF URL", FieldKind::Url),
            FieldDef::new("cvFile", "CV PDF (Upload)", FieldKind::File),
            FieldDef::new(
                "education",
                "Education",
                FieldKind::ObjectArray {
                    fields: vec![
                        FieldDef::new("degree", "Degree", FieldKind::String),
                        FieldDef::new("field", "Field", FieldKind::String),
                        FieldDef::new("institution", "Institution", FieldKind::String),
                        FieldDef::new("location", "Location", FieldKind::String),
                        FieldDef::new("startYear", "Start Year", FieldKind::Number),
                        FieldDef::new("endYear", "End Year", FieldKind::Number),
                        FieldDef::new("notes", "Notes", FieldKind::StringArray),
                    ],
                },
            ),
            FieldDef::new(
                "experience",
                "Experience",
                FieldKind::ObjectArray {
                    fields: vec![
                        FieldDef::new("company", "Company", FieldKind::String),
                        FieldDef::new("title", "Title", FieldKind::String),
                        FieldDef::new("location", "Location", FieldKind::String),
                        FieldDef::new("start", "Start (YYYY-MM)", FieldKind::String),
                        FieldDef::new("end", "End (YYYY-MM)", FieldKind::String),
                        FieldDef::new("current", "Current", FieldKind::Boolean)
                            .with_initial(json!(false)),
                        FieldDef::new("highlights", "Highlights", FieldKind::StringArray),
                    ],
                },
            ),
            FieldDef::new(
                "publications",
                "Publications",
                FieldKind::ObjectArray {
                    fields: vec![
                        FieldDef::new("citation", "Citation", FieldKind::Text),
                        FieldDef::new("year", "Year", FieldKind::Number),
                        FieldDef::new("link", "Link", FieldKind::Url),
                    ],
                },
            ),
            FieldDef::new("awards", "Awards", FieldKind::StringArray),
            FieldDef::new("memberships", "Memberships", FieldKind::StringArray),
            FieldDef::new(
                "skills",
                "Skills",
                FieldKind::Object {
                    fields: vec![
                        FieldDef::new("programming", "Programming", FieldKind::StringArray),
                        FieldDef::new("mlData", "ML / Data", FieldKind::StringArray),
                        FieldDef::new("tools", "Tools", FieldKind::StringArray),
                        FieldDef::new("actuarial", "Actuarial / Finance", FieldKind::StringArray),
                    ],
                },
            ),
        ],
    }
}

pub fn project() -> SchemaType {
    SchemaType {
        name: "project",
        title: "Project",
        fields: vec![
            FieldDef::new("title", "Title", FieldKind::String),
            FieldDef::new(
                "slug",
                "Slug",
                FieldKind::Slug {
                    source: "title",
                    max_length: 96,
                },
            ),
            FieldDef::new("summary", "Summary", FieldKind::Text),
            FieldDef::new("mainImage", "Cover Image", FieldKind::Image),
            FieldDef::new("content", "Detailed Description", FieldKind::RichText),
            FieldDef::new("techStack", "Tech Stack", FieldKind::StringArray),
            FieldDef::new("tags", "Tags", FieldKind::StringArray),
            FieldDef::new("githubUrl", "GitHub URL", FieldKind::Url),
            FieldDef::new("liveUrl", "Site URL", FieldKind::Url),
            FieldDef::new("featured", "Featured on Homepage", FieldKind::Boolean)
                .with_initial(json!(false)),
            FieldDef::new("publishedAt", "Published At", FieldKind::Datetime),
        ],
    }
}

pub fn post() -> SchemaType {
    SchemaType {
        name: "post",
        title: "Post",
        fields: vec![
            FieldDef::new("title", "Title", FieldKind::String),
            FieldDef::new(
                "slug",
                "Slug",
                FieldKind::Slug {
                    source: "title",
                    max_length: 96,
                },
            ),
            FieldDef::new("author", "Author", FieldKind::Reference { to: "author" }),
            FieldDef::new("mainImage", "Main Image", FieldKind::Image),
            FieldDef::new(
                "categories",
                "Categories",
                FieldKind::ReferenceArray { to: "category" },
            ),
            FieldDef::new("publishedAt", "Published At", FieldKind::Datetime),
            FieldDef::new("body", "Body", FieldKind::RichText),
        ],
    }
}

pub fn author() -> SchemaType {
    SchemaType {
        name: "author",
        title: "Author",
        fields: vec![
            FieldDef::new("name", "Name", FieldKind::String),
            FieldDef::new(
                "slug",
                "Slug",
                FieldKind::Slug {
                    source: "name",
                    max_length: 96,
                },
            ),
            FieldDef::new("image", "Image", FieldKind::Image),
            FieldDef::new("bio", "Bio", FieldKind::RichText),
        ],
    }
}

pub fn category() -> SchemaType {
    SchemaType {
        name: "category",
        title: "Category",
        fields: vec![
            FieldDef::new("title", "Title", FieldKind::String),
            FieldDef::new("description", "Description", FieldKind::Text),
        ],
    }
}
