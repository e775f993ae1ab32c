//! Job Catalog: the static table of open roles.
//!
//! Read-only and process-wide. An unknown role key is a normal outcome
//! (`None`), rendered by callers as the invalid-role state.

use serde::Serialize;

/// A single open role as shown on the careers pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobPosting {
    /// Role slug used in URLs, e.g. `aiml`.
    pub key: &'static str,
    pub title: &'static str,
    /// One-line blurb for the careers listing card.
    pub tagline: &'static str,
    pub description: &'static str,
    /// Ordered as displayed.
    pub requirements: &'static [&'static str],
}

impl JobPosting {
    /// Renders the posting in the plain-text layout the backend summarizer expects:
    /// title, description, a `Requirements:` header, then one requirement per line.
    pub fn raw_jd_text(&self) -> String {
        let mut text = format!("{}\n{}\nRequirements:", self.title, self.description);
        for requirement in self.requirements {
            text.push('\n');
            text.push_str(requirement);
        }
        text
    }
}

static POSTINGS: &[JobPosting] = &[
    JobPosting {
        key: "aiml",
        title: "AI/ML Engineer",
        tagline: "Shape the future of AI with cutting-edge machine learning solutions",
        description: "Join our cutting-edge AI team to develop and implement innovative machine learning solutions.",
        requirements: &[
            "Masters/PhD in Computer Science, AI, or related field",
            "3+ years of experience in ML/DL",
            "Expertise in Python, TensorFlow, PyTorch",
            "Strong background in mathematics and statistics",
            "Experience with NLP and Computer Vision",
        ],
    },
    JobPosting {
        key: "fullstack",
        title: "Full Stack Developer",
        tagline: "Build powerful, scalable applications from front to back",
        description: "Create scalable web applications using modern technologies and best practices.",
        requirements: &[
            "Bachelor's in Computer Science or related field",
            "4+ years of full stack development experience",
            "Expertise in React, Node.js, and modern frameworks",
            "Strong understanding of databases and API design",
            "Experience with cloud platforms (AWS/Azure/GCP)",
        ],
    },
];

/// Message shown when a role key does not resolve.
pub const INVALID_ROLE_MESSAGE: &str = "Invalid job role specified!";

/// Looks up a posting by role key. Keys are matched exactly.
pub fn lookup(role: &str) -> Option<&'static JobPosting> {
    POSTINGS.iter().find(|p| p.key == role)
}

/// All postings in listing order.
pub fn postings() -> &'static [JobPosting] {
    POSTINGS
}
