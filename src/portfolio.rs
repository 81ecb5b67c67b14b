//! Display records for every section of the site.
//!
//! Everything here is compiled into the bundle and never mutated. Sections
//! borrow the slices directly; nothing is cloned at render time.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub location: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub image: &'static str,
    pub availability: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationStatus {
    Current,
    Completed,
}

impl EducationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Current => "Current",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationRecord {
    pub degree: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub details: &'static str,
    pub status: EducationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceRecord {
    pub role: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub paragraphs: &'static [&'static str],
    pub certificate: Option<&'static str>,
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    /// Paragraphs separated by `\n`.
    pub long_description: &'static str,
    pub live_link: &'static str,
    pub code_link: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub features: Option<&'static [&'static str]>,
    pub challenges: Option<&'static [&'static str]>,
    pub duration: Option<&'static str>,
    pub team: Option<&'static str>,
}

impl ProjectRecord {
    pub fn paragraphs(&self) -> impl Iterator<Item = &'static str> {
        self.long_description
            .split('\n')
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Wrench,
    Layers,
    Database,
    Server,
    Globe,
    Cpu,
}

impl SkillIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Wrench => "🔧",
            Self::Layers => "🧱",
            Self::Database => "🗄️",
            Self::Server => "🚀",
            Self::Globe => "🌐",
            Self::Cpu => "🧠",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage used only for the width of the proficiency bar.
    pub level: Option<u8>,
}

impl Skill {
    const fn named(name: &'static str) -> Self {
        Self { name, level: None }
    }

    const fn rated(name: &'static str, level: u8) -> Self {
        Self {
            name,
            level: Some(level),
        }
    }

    pub fn bar_width(&self) -> Option<String> {
        self.level.map(|l| format!("width: {}%", l.min(100)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: SkillIcon,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodingPlatform {
    pub platform: &'static str,
    pub problems: &'static str,
    pub color: &'static str,
}

impl CodingPlatform {
    pub fn initial(&self) -> char {
        self.platform.chars().next().unwrap_or('?')
    }
}

/// Colour tag for achievement and certification cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Gold,
    Silver,
    Bronze,
    Violet,
    Green,
    Purple,
    Blue,
}

impl Accent {
    pub fn gradient(self) -> &'static str {
        match self {
            Self::Gold => "from-yellow-500 to-orange-500",
            Self::Silver => "from-gray-400 to-gray-600",
            Self::Bronze => "from-orange-600 to-red-600",
            Self::Violet => "from-purple-500 to-blue-500",
            Self::Green => "from-emerald-400 to-green-600",
            Self::Purple => "from-fuchsia-500 to-purple-600",
            Self::Blue => "from-sky-500 to-blue-700",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Self::Gold => "#FFD700",
            Self::Silver => "#9CA3AF",
            Self::Bronze => "#EA580C",
            Self::Violet => "#6C63FF",
            Self::Green => "#00EA64",
            Self::Purple => "#A435F0",
            Self::Blue => "#02569B",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementRecord {
    pub title: &'static str,
    pub result: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertificationRecord {
    pub title: &'static str,
    pub issuer: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub title: &'static str,
    pub href: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Mahaveer K",
    headline: "Flutter & Full Stack Developer",
    email: "mahaveer.k2023it@sece.ac.in",
    phone: "+91 6374827794",
    phone_href: "tel:+916374827794",
    location: "Tamil Nadu, India",
    github: "https://github.com/MAHAVEER-IT",
    linkedin: "https://www.linkedin.com/in/mahaveer-k",
    image: "/me.png",
    availability: "Available",
};

pub static NAV_LINKS: &[NavLink] = &[
    NavLink { title: "Home", href: "#home" },
    NavLink { title: "About", href: "#about" },
    NavLink { title: "Experience", href: "#experience" },
    NavLink { title: "Projects", href: "#projects" },
    NavLink { title: "Skills", href: "#skills" },
    NavLink { title: "Contact", href: "#contact" },
];

pub static EDUCATION: &[EducationRecord] = &[
    EducationRecord {
        degree: "B.Tech in Information Technology",
        institution: "Sri Eshwar College of Engineering",
        duration: "2023 - 2027",
        details: "CGPA: 7.85",
        status: EducationStatus::Current,
    },
    EducationRecord {
        degree: "Higher Secondary Certificate (HSC)",
        institution: "Palaniyammal Higher Secondary School",
        duration: "2022 - 2023",
        details: "Percentage: 84.6%",
        status: EducationStatus::Completed,
    },
    EducationRecord {
        degree: "Secondary School Leaving Certificate (SSLC)",
        institution: "Palaniyammal Higher Secondary School",
        duration: "2021 - 2022",
        details: "Successfully Completed",
        status: EducationStatus::Completed,
    },
];

pub static EXPERIENCE: &[ExperienceRecord] = &[ExperienceRecord {
    role: "MERN Stack Developer Intern",
    company: "Better Tomorrow",
    duration: "Jan 2025 - Mar 2025",
    location: "Remote",
    paragraphs: &[
        "During my MERN stack internship at Better Tomorrow, I developed NextStop, a travel management web application.",
        "The application includes separate pages for administrators to manage listings and bookings, as well as for users to explore destinations and track their trips.",
        "I deployed the application using Vercel for the frontend and Render.com for the backend.",
    ],
    certificate: Some(
        "https://drive.google.com/file/d/1DRmCEyK_xqKQaILls4RcqBg9it3JWzYU/view?usp=drive_link",
    ),
    technologies: &["React", "Node.js", "Express", "MongoDB", "JWT", "Vercel", "Render"],
}];

pub static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "Bank Insight",
        description: "An all-in-one banking app that offers features such as balance check, mini statements, ATM blocking, customer support, loan calculators, nearby ATM/bank locator, currency converter, and expense tracker.",
        long_description: "Bank Insight brings the everyday banking chores people usually spread across several apps into a single Flutter client.\nAccount holders can check balances, pull mini statements and block a lost ATM card, while calculators and a currency converter help with planning.\nA map view locates the nearest ATMs and branches, and an expense tracker keeps monthly spending visible.",
        live_link: "https://drive.google.com/drive/folders/13j3pnF7rVRWrvD1OvyUghWhdSVP8HYQR?usp=drive_link",
        code_link: "https://github.com/MAHAVEER-IT/bank_inish.git",
        image: "https://images.pexels.com/photos/7821487/pexels-photo-7821487.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        technologies: &["Flutter", "Firebase", "Currency Converter API"],
        features: Some(&[
            "Balance check and mini statements",
            "ATM card blocking",
            "Loan calculator and currency converter",
            "Nearby ATM and branch locator",
            "Expense tracker",
        ]),
        challenges: Some(&[
            "Keeping several third-party APIs responsive on low-end devices",
            "Designing one navigation model for many unrelated tools",
        ]),
        duration: Some("2 months"),
        team: Some("Solo project"),
    },
    ProjectRecord {
        title: "Sow&Grow",
        description: "An agriculture application that helps rural farmers monitor diseases, communicate with veterinarians, and receive vaccination alerts, with voice assistance, AI-driven image recognition and real-time mapping in local languages.",
        long_description: "Sow&Grow was built for rural farmers who need quick answers about crop and livestock health.\nFarmers photograph a plant or animal and an image-recognition model suggests likely diseases, then the app connects them with a veterinarian.\nVaccination alerts, voice assistance and local-language support make the app usable without reading English.",
        live_link: "https://drive.google.com/drive/folders/1Wtnws7KfFGfdtW0MnelPB_bsFw71JwVl?usp=drive_link",
        code_link: "https://github.com/MAHAVEER-IT/Farmcare_Flutter.git",
        image: "https://images.pexels.com/photos/2886937/pexels-photo-2886937.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        technologies: &["Flutter", "Dart", "Firebase", "Maps API"],
        features: Some(&[
            "AI disease detection from photos",
            "Chat with veterinarians",
            "Vaccination reminders",
            "Voice assistant in local languages",
            "Real-time map of nearby services",
        ]),
        challenges: Some(&[
            "Running image recognition on unreliable rural networks",
            "Localising the full interface and voice flows",
        ]),
        duration: Some("3 months"),
        team: Some("Team of 4"),
    },
    ProjectRecord {
        title: "Note Mate",
        description: "A MERN stack productivity app featuring intelligent note-taking, movable sticky notes, and an AI-driven daily planner with speech-to-text capabilities.",
        long_description: "NoteMate is a MERN stack web app designed for productivity.\nIt combines organised notes, a visual sticky-note board and an AI-generated daily schedule with personalised reminders.\nTheme and language preferences let each user shape the workspace around the way they plan their day.",
        live_link: "https://note-mate-sage.vercel.app/",
        code_link: "https://github.com/MAHAVEER-IT/Note-Mate.git",
        image: "https://images.pexels.com/photos/6804605/pexels-photo-6804605.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        technologies: &["React", "Express", "Node.js", "MongoDB", "OpenAI"],
        features: Some(&[
            "Rich note-taking with folders",
            "Draggable sticky-note board",
            "AI daily planner",
            "Speech-to-text input",
        ]),
        challenges: None,
        duration: Some("6 weeks"),
        team: Some("Solo project"),
    },
];

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming Languages",
        icon: SkillIcon::Code,
        skills: &[
            Skill::rated("C++", 75),
            Skill::rated("Dart", 85),
            Skill::rated("JavaScript", 80),
            Skill::rated("REST API", 80),
        ],
    },
    SkillCategory {
        title: "Tools",
        icon: SkillIcon::Wrench,
        skills: &[
            Skill::named("VS Code"),
            Skill::named("Android Studio"),
            Skill::named("Postman"),
        ],
    },
    SkillCategory {
        title: "Framework/Library",
        icon: SkillIcon::Layers,
        skills: &[
            Skill::rated("Flutter", 90),
            Skill::rated("React", 80),
            Skill::rated("NodeJS", 75),
        ],
    },
    SkillCategory {
        title: "Database",
        icon: SkillIcon::Database,
        skills: &[
            Skill::named("Firebase"),
            Skill::named("MongoDB"),
            Skill::named("MySQL"),
        ],
    },
    SkillCategory {
        title: "Architecture",
        icon: SkillIcon::Server,
        skills: &[
            Skill::named("BLoC (Business Logic Component)"),
            Skill::named("Clean Architecture"),
        ],
    },
    SkillCategory {
        title: "CI/CD",
        icon: SkillIcon::Globe,
        skills: &[Skill::named("GitHub")],
    },
    SkillCategory {
        title: "Core",
        icon: SkillIcon::Cpu,
        skills: &[
            Skill::named("Data Structures and Algorithms"),
            Skill::named("OS"),
        ],
    },
];

pub static CODING_PLATFORMS: &[CodingPlatform] = &[
    CodingPlatform {
        platform: "LeetCode",
        problems: "40+",
        color: "#FFA116",
    },
    CodingPlatform {
        platform: "CodeChef",
        problems: "50+",
        color: "#5B4638",
    },
    CodingPlatform {
        platform: "SkillRack",
        problems: "100+",
        color: "#00A651",
    },
    CodingPlatform {
        platform: "HackerRank",
        problems: "100+",
        color: "#00EA64",
    },
];

pub static ACHIEVEMENTS: &[AchievementRecord] = &[
    AchievementRecord {
        title: "Freshothon (Project Expo)",
        result: "Third Place",
        description: "Secured third place in college project exhibition",
        accent: Accent::Gold,
    },
    AchievementRecord {
        title: "Hackastrom (36-hour Hackathon)",
        result: "Second Place",
        description: "Achieved second place in intensive 36-hour hackathon",
        accent: Accent::Silver,
    },
    AchievementRecord {
        title: "Tech Trek Hackathon",
        result: "Finalist",
        description: "Advanced to final round in 8-hour hackathon",
        accent: Accent::Bronze,
    },
    AchievementRecord {
        title: "Vultr Cloud Innovate Hackathon",
        result: "Selected for Two Rounds",
        description: "Selected for multiple rounds in GeeksforGeeks hackathon",
        accent: Accent::Violet,
    },
];

pub static CERTIFICATIONS: &[CertificationRecord] = &[
    CertificationRecord {
        title: "SQL Certification",
        issuer: "HackerRank",
        description: "Proficiency in SQL database management",
        accent: Accent::Green,
    },
    CertificationRecord {
        title: "Data Structures and Algorithms",
        issuer: "Udemy",
        description: "Fundamental programming concepts course",
        accent: Accent::Purple,
    },
    CertificationRecord {
        title: "5-Day Flutter Bootcamp",
        issuer: "LetsUpgrade",
        description: "Intensive Flutter development training",
        accent: Accent::Blue,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_description_paragraphs() {
        let p = &PROJECTS[0];
        let paragraphs = p.paragraphs().collect::<Vec<_>>();
        assert_eq!(paragraphs.len(), 3);
        assert!(paragraphs.iter().all(|s| !s.is_empty() && !s.contains('\n')));
    }

    #[test]
    fn test_skill_levels_in_range() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty(), "{} has no skills", category.title);
            for skill in category.skills {
                if let Some(level) = skill.level {
                    assert!(level <= 100);
                    assert_eq!(
                        skill.bar_width(),
                        Some(format!("width: {level}%"))
                    );
                } else {
                    assert_eq!(skill.bar_width(), None);
                }
            }
        }
    }

    #[test]
    fn test_nav_links_are_anchors() {
        for link in NAV_LINKS {
            assert!(link.href.starts_with('#'));
            assert_eq!(link.href[1..], link.title.to_lowercase());
        }
    }

    #[test]
    fn test_single_current_education() {
        let current = EDUCATION
            .iter()
            .filter(|e| e.status == EducationStatus::Current)
            .count();
        assert_eq!(current, 1);
        assert_eq!(EducationStatus::Current.label(), "Current");
    }

    #[test]
    fn test_platform_initial() {
        let initials = CODING_PLATFORMS
            .iter()
            .map(|p| p.initial())
            .collect::<String>();
        assert_eq!(initials, "LCSH");
    }
}
