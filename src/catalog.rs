use std::fmt;

/// Identifier of one of the page's navigable sections.
///
/// Variant order matches [`SECTIONS`]; the first variant is the default active
/// section before any scroll position has been observed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn anchor(self) -> &'static str {
        self.section().anchor
    }

    pub fn section(self) -> &'static Section {
        // SECTIONS is declared in variant order
        &SECTIONS[self as usize]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub label: &'static str,
    pub anchor: &'static str,
}

pub static SECTIONS: [Section; 5] = [
    Section {
        id: SectionId::Home,
        label: "Home",
        anchor: "#home",
    },
    Section {
        id: SectionId::About,
        label: "About",
        anchor: "#about",
    },
    Section {
        id: SectionId::Skills,
        label: "Skills",
        anchor: "#skills",
    },
    Section {
        id: SectionId::Projects,
        label: "Projects",
        anchor: "#projects",
    },
    Section {
        id: SectionId::Contact,
        label: "Contact",
        anchor: "#contact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Database,
    Briefcase,
}

impl SkillIcon {
    /// Glyph rendered in the skill card header.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Database => "🗄",
            Self::Briefcase => "💼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub icon: SkillIcon,
    pub items: &'static [&'static str],
}

pub static SKILLS: [SkillGroup; 3] = [
    SkillGroup {
        category: "Frontend",
        icon: SkillIcon::Code,
        items: &["HTML5", "CSS3", "JavaScript (ES6+)", "React", "Vite"],
    },
    SkillGroup {
        category: "Backend & Services",
        icon: SkillIcon::Database,
        items: &["Node.js", "Firebase", "Firestore", "JSON"],
    },
    SkillGroup {
        category: "Tools & Others",
        icon: SkillIcon::Briefcase,
        items: &[
            "Git",
            "GitHub",
            "VS Code",
            "Firebase Console",
            "Chrome DevTools",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
    pub glyph: &'static str,
}

impl Project {
    /// Tech labels as displayed, each followed by a bullet except the last.
    pub fn tech_badges(&self) -> impl Iterator<Item = String> + '_ {
        let last = self.tech.len().saturating_sub(1);
        self.tech.iter().enumerate().map(move |(i, t)| {
            if i < last {
                format!("{t} •")
            } else {
                t.to_string()
            }
        })
    }
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Sparkflow 🧩",
        description: "Web-based task management application developed during my internship to organize, track, and update assigned tasks in an efficient workflow.",
        tech: &["React", "JavaScript", "Firebase", "Git"],
        link: "#",
        glyph: "⚡",
    },
    Project {
        title: "ContactVault 📇",
        description: "Contact management system allowing users to store and manage contact information using a clean frontend connected to cloud storage.",
        tech: &["HTML", "CSS", "JS", "Firebase", "Git"],
        link: "#",
        glyph: "🔒",
    },
    Project {
        title: "BlogFlow 📝",
        description: "Responsive blogging web application created during my internship to display and manage blog content with reusable UI components.",
        tech: &["React", "JavaScript", "Firebase", "Git"],
        link: "#",
        glyph: "✍️",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub first_name: &'static str,
    pub brand: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub resume_file: &'static str,
}

impl Profile {
    /// Initials shown in place of a profile photo.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const PROFILE: Profile = Profile {
    name: "Arnav Bhoite",
    first_name: "Arnav",
    brand: "Arnavb.tech",
    role: "Web Developer (React • Node • Firebase)",
    tagline: "Building real-world web applications with React and Node focused on performance, clean structure, and practical user needs.",
    email: "bhoitearnav1645@gmail.com",
    location: "Pune, India",
    github: "https://github.com/Arnav-Bhoite-1645",
    linkedin: "#",
    resume_file: "Arnav_Bhoite_Resume.pdf",
};
