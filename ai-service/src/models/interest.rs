use serde::Serialize;

/// A recommended topic or activity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interest {
    pub id: u32,
    pub name: &'static str,
}

pub static SOFTWARE_INTERESTS: [Interest; 3] = [
    Interest {
        id: 1,
        name: "Open Source Contributing",
    },
    Interest {
        id: 2,
        name: "AI/ML Workshops",
    },
    Interest {
        id: 3,
        name: "Tech Mentorship",
    },
];

pub static DEFAULT_INTERESTS: [Interest; 3] = [
    Interest {
        id: 4,
        name: "Community Building",
    },
    Interest {
        id: 5,
        name: "Cultural Exchange",
    },
    Interest {
        id: 6,
        name: "Entrepreneurship",
    },
];
