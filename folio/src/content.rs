//! Static page content.

/// Owner of the portfolio and the hero copy.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Profile {
    pub(crate) greeting: &'static str,
    pub(crate) first_name: &'static str,
    pub(crate) last_name: &'static str,
    pub(crate) tagline: &'static str,
    pub(crate) description: &'static str,
    pub(crate) resume_url: &'static str,
}

impl Profile {
    pub(crate) fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

pub(crate) const PROFILE: Profile = Profile {
    greeting: "Hello, I'm",
    first_name: "Harmandeep",
    last_name: "Singh",
    tagline: "Aspiring Data Scientist",
    description: "Passionate about applying AI/ML to solve real-world \
                  problems. Experienced with data preprocessing, model \
                  training, and visualization.",
    resume_url: "https://drive.google.com/file/d/1Nu1D0hJf2Rfp14N2I21_TFsRnpOlYLyS/view?usp=sharing",
};

/// Kind of social profile, used to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SocialKind {
    CodeHost,
    ProfessionalNetwork,
    Microblog,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SocialLink {
    pub(crate) kind: SocialKind,
    pub(crate) label: &'static str,
    pub(crate) url: &'static str,
}

pub(crate) static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        kind: SocialKind::CodeHost,
        label: "GitHub",
        url: "https://github.com/codebyharman",
    },
    SocialLink {
        kind: SocialKind::ProfessionalNetwork,
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/codebyharman/",
    },
    SocialLink {
        kind: SocialKind::Microblog,
        label: "X",
        url: "https://x.com/codebyharman",
    },
];

/// Social link of the given kind.
pub(crate) fn social(kind: SocialKind) -> Option<&'static SocialLink> {
    SOCIAL_LINKS.iter().find(|link| link.kind == kind)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ContactDetails {
    pub(crate) email: &'static str,
    pub(crate) phone: &'static str,
}

impl ContactDetails {
    pub(crate) fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub(crate) const CONTACT: ContactDetails = ContactDetails {
    email: "harman1807d@gmail.com",
    phone: "+91-7678115855",
};

/// Heading shown above a page section.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SectionCopy {
    pub(crate) title: &'static str,
    pub(crate) subtitle: &'static str,
}

pub(crate) const PROJECTS_COPY: SectionCopy = SectionCopy {
    title: "Projects",
    subtitle: "Explore my portfolio of AI/ML projects showcasing expertise \
               in machine learning, deep learning, computer vision, and \
               natural language processing.",
};

pub(crate) const EDUCATION_COPY: SectionCopy = SectionCopy {
    title: "Education & Experience",
    subtitle: "My educational background and professional experience",
};

pub(crate) const SKILLS_COPY: SectionCopy = SectionCopy {
    title: "Skills",
    subtitle: "Technical competencies and expertise developed through \
               academic research, professional experience, and personal \
               projects.",
};

pub(crate) const CONTACT_COPY: SectionCopy = SectionCopy {
    title: "Contact",
    subtitle: "Interested in collaborating or have questions about my \
               work? Feel free to reach out through any of the channels \
               below.",
};

pub(crate) const GET_IN_TOUCH_COPY: SectionCopy = SectionCopy {
    title: "Get In Touch",
    subtitle: "I'm currently looking for new opportunities in AI/ML \
               development. My inbox is always open for interesting \
               discussions and potential collaborations.",
};

pub(crate) const VIEW_WORK_COPY: SectionCopy = SectionCopy {
    title: "View My Work",
    subtitle: "Check out my code repositories, research papers, and other \
               professional profiles. Feel free to explore and connect.",
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Education {
    pub(crate) degree: &'static str,
    pub(crate) school: &'static str,
    pub(crate) expected_year: u16,
}

pub(crate) const EDUCATION: Education = Education {
    degree: "B.Tech in Computer Science (Core)",
    school: "Guru Gobind Singh Indraprastha University (GTBIT), Delhi",
    expected_year: 2026,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Experience {
    pub(crate) role: &'static str,
    pub(crate) employer: &'static str,
    pub(crate) period: &'static str,
    pub(crate) highlights: [&'static str; 2],
}

impl Experience {
    pub(crate) fn heading(&self) -> String {
        format!("{} - {}", self.role, self.employer)
    }
}

pub(crate) const EXPERIENCE: Experience = Experience {
    role: "Student Intern",
    employer: "Technophilia",
    period: "Jul 2024 - Aug 2024",
    highlights: [
        "Trained in Python Programming",
        "Gained exposure to numpy, pandas, matplotlib",
    ],
};

pub(crate) static CERTIFICATIONS: [&str; 4] = [
    "GOOGLE Data Analytics",
    "Foundations of Data Science",
    "The Power of Statistics",
    "Data Structures and Algorithm",
];

/// One skill with its self-assessed proficiency in percent.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Skill {
    pub(crate) name: &'static str,
    pub(crate) percent: u8,
}

impl Skill {
    /// Proficiency as a ratio in `0.0..=1.0`.
    pub(crate) fn ratio(&self) -> f32 {
        f32::from(self.percent.min(100)) / 100.0
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SkillCategory {
    pub(crate) title: &'static str,
    pub(crate) skills: &'static [Skill],
}

const fn skill(name: &'static str, percent: u8) -> Skill {
    Skill { name, percent }
}

pub(crate) static SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "ML/DS Skills",
        skills: &[
            skill("Data Cleaning", 85),
            skill("Exploratory Data Analysis", 85),
            skill("Model Training", 80),
            skill("Data Visualization", 85),
        ],
    },
    SkillCategory {
        title: "Programming Languages",
        skills: &[skill("Python", 90), skill("SQL", 75)],
    },
    SkillCategory {
        title: "Libraries & Tools",
        skills: &[
            skill("NumPy", 85),
            skill("Pandas", 85),
            skill("Scikit-learn", 80),
            skill("TensorFlow", 70),
            skill("Matplotlib", 85),
            skill("Seaborn", 80),
        ],
    },
];

pub(crate) static ADDITIONAL_COMPETENCIES: [&str; 12] = [
    "Jupyter Notebook",
    "Google Colab",
    "Git",
    "GitHub",
    "Analytical Thinking",
    "Communication",
    "Teamwork",
    "Regression",
    "Classification",
    "Neural Networks (beginner)",
    "Model Evaluation",
    "Continuous Learning",
];

pub(crate) const BUILT_WITH: &str = "Designed and built with Rust and iced";
