//! Static copy and display records rendered by the page sections.

/// Glyph from the lucide icon font linked in the page shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowDown,
    Award,
    Close,
    Cloud,
    Code,
    Database,
    Download,
    ExternalLink,
    Github,
    Layout,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    Moon,
    Phone,
    Send,
    Server,
    Sun,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::ArrowDown => "icon-arrow-down",
            Icon::Award => "icon-award",
            Icon::Close => "icon-x",
            Icon::Cloud => "icon-cloud",
            Icon::Code => "icon-code-xml",
            Icon::Database => "icon-database",
            Icon::Download => "icon-download",
            Icon::ExternalLink => "icon-external-link",
            Icon::Github => "icon-github",
            Icon::Layout => "icon-layout-dashboard",
            Icon::Linkedin => "icon-linkedin",
            Icon::Mail => "icon-mail",
            Icon::MapPin => "icon-map-pin",
            Icon::Menu => "icon-menu",
            Icon::Moon => "icon-moon",
            Icon::Phone => "icon-phone",
            Icon::Send => "icon-send",
            Icon::Server => "icon-server",
            Icon::Sun => "icon-sun",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub availability: &'static str,
    pub location: &'static str,
    pub avatar: &'static str,
    pub email: &'static str,
    pub phone_display: &'static str,
    pub phone_uri: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub frontend_mentor: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const PROFILE: Profile = Profile {
    name: "Isaac Hassani",
    initials: "IH",
    role: "Développeur Full Stack",
    tagline: "Développeur Full Stack avec une vision Cloud/DevOps. Actuellement en Bachelor Systèmes d'Information, je conçois des architectures robustes et scalables.",
    availability: "Disponible dès Octobre 2026",
    location: "Toulouse, France",
    avatar: "https://customer-assets.emergentagent.com/job_cloud-ready-dev/artifacts/ebjplf1s_image.png",
    email: "isaac.hassani@limayrac.fr",
    phone_display: "07 64 54 04 60",
    phone_uri: "tel:+33764540460",
    github: "https://github.com/Isaac1h",
    linkedin: "https://www.linkedin.com/in/isaac-hassani/",
    frontend_mentor: "https://www.frontendmentor.io/profile/Isaac1h",
};

pub const ABOUT: &[&str] = &[
    "Je suis un développeur full stack en alternance, passionné par la création d'applications web modernes. J'apprends actuellement différentes technologies du développement, aussi bien côté front-end que back-end, et je m'intéresse de plus en plus au cloud et au DevOps, domaines dans lesquels j'ai prévu de me former davantage.",
    "Je cherche à évoluer au sein d'équipes dynamiques et à contribuer à des projets innovants, tout en continuant à développer mes compétences et à élargir mon champ d'expertise.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Solution,
    Code,
    Demo,
}

impl LinkKind {
    pub fn icon(self) -> Icon {
        match self {
            LinkKind::Code => Icon::Github,
            LinkKind::Solution | LinkKind::Demo => Icon::ExternalLink,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLink {
    pub label: &'static str,
    pub href: &'static str,
    pub kind: LinkKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: Option<&'static str>,
    pub links: &'static [ProjectLink],
}

const FRONTEND_TAGS: &[&str] = &["HTML5", "CSS3", "JavaScript", "Bootstrap"];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Contact Form with Validation",
        description: "Formulaire de contact responsive avec validation côté client et feedback utilisateur en temps réel.",
        tags: FRONTEND_TAGS,
        image: None,
        links: &[
            ProjectLink {
                label: "Solution",
                href: "https://www.frontendmentor.io/solutions/release-form-main-w-validation-bootstrap-HZjXqEjm6e",
                kind: LinkKind::Solution,
            },
            ProjectLink {
                label: "Code",
                href: "https://github.com/Isaac1h/contact-form",
                kind: LinkKind::Code,
            },
        ],
    },
    Project {
        title: "Calculator App",
        description: "Application calculatrice avec thème personnalisable et gestion complète des opérations mathématiques.",
        tags: FRONTEND_TAGS,
        image: None,
        links: &[
            ProjectLink {
                label: "Solution",
                href: "https://www.frontendmentor.io/solutions/calculator-app-release-w-boostrap-lmvhug_8h1",
                kind: LinkKind::Solution,
            },
            ProjectLink {
                label: "Code",
                href: "https://github.com/Isaac1h/Calculator-app",
                kind: LinkKind::Code,
            },
        ],
    },
    Project {
        title: "Pricing Component with Toggle",
        description: "Composant de tarification interactif avec switch annuel/mensuel et animations fluides.",
        tags: FRONTEND_TAGS,
        image: None,
        links: &[
            ProjectLink {
                label: "Solution",
                href: "https://www.frontendmentor.io/solutions/release-challenge-pricing-component-TLdcro1VST",
                kind: LinkKind::Solution,
            },
            ProjectLink {
                label: "Code",
                href: "https://github.com/Isaac1h/Pricing-component-with-toggle",
                kind: LinkKind::Code,
            },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Responsibility {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Download {
    pub href: &'static str,
    pub file_name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedProject {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub status: &'static str,
    pub context: &'static str,
    pub responsibilities: &'static [Responsibility],
    pub stack: &'static [&'static str],
    pub impact: &'static str,
    pub brief: Download,
}

pub const FEATURED_PROJECT: FeaturedProject = FeaturedProject {
    title: "Application Métier H Propreté",
    subtitle: "Digitalisation complète de la gestion d'une entreprise de nettoyage",
    status: "En cours",
    context: "Je conçois et développe de A à Z une application métier complète qui permettra la gestion intégrale d'une entreprise de nettoyage : planning en temps réel, gestion RH, suivi des interventions, et tableau de bord analytique pour la direction.",
    responsibilities: &[
        Responsibility {
            heading: "Conception architecture complète :",
            body: "Design de l'architecture système, modélisation de la base de données, et choix des technologies",
        },
        Responsibility {
            heading: "Authentification complexe :",
            body: "Implémentation JWT avec gestion de rôles avancée (Admin/User) et sécurisation des routes",
        },
        Responsibility {
            heading: "Fonctionnalités critiques :",
            body: "Planning temps réel avec drag-and-drop, gestion RH complète (contrats, absences, congés), suivi des interventions",
        },
        Responsibility {
            heading: "Méthodologie Agile :",
            body: "Sprints Scrum, CI/CD sur GitLab, déploiement containerisé avec Docker",
        },
    ],
    stack: &[
        "Next.js",
        "React",
        "Node.js",
        "Express",
        "MongoDB",
        "Docker",
        "GitLab CI/CD",
        "JWT",
    ],
    impact: "Cette expérience en alternance me permettra d'acquérir une expertise niveau Bac+5, en développant une solution complète de la conception à la mise en production.",
    brief: Download {
        href: "https://customer-assets.emergentagent.com/job_cloud-ready-dev/artifacts/a7mnc1l1_Fiche%20de%20Poste%20%E2%80%93%20Apprenti%20D%C3%A9veloppeur%20Web.pdf",
        file_name: "Fiche_de_Poste_Apprenti_Developpeur_Web.pdf",
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloudGoal {
    pub label: &'static str,
    pub text: &'static str,
}

pub const CLOUD_PITCH: &str = "Je ne suis pas seulement un développeur d'application, je me forme activement à l'infrastructure qui les héberge. Ma vision : maîtriser l'ensemble du cycle de vie d'une application, du développement au déploiement en production.";

pub const CLOUD_GOALS: &[CloudGoal] = &[
    CloudGoal {
        label: "En cours :",
        text: "Préparation active de la certification AWS Cloud Practitioner",
    },
    CloudGoal {
        label: "Objectif :",
        text: "Déployer des architectures cloud scalables et sécurisées",
    },
    CloudGoal {
        label: "Vision :",
        text: "DevOps Engineer avec expertise Full Stack",
    },
];

pub const CLOUD_CERTIFICATION: &str = "AWS Cloud Practitioner (en révision)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, icon: Icon) -> Skill {
    Skill { name, icon }
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Front-End",
        icon: Icon::Layout,
        skills: &[
            skill("React", Icon::Layout),
            skill("Next.js", Icon::Code),
            skill("HTML5/CSS3", Icon::Layout),
            skill("JavaScript", Icon::Code),
            skill("Responsive Design", Icon::Layout),
        ],
    },
    SkillCategory {
        title: "Back-End",
        icon: Icon::Server,
        skills: &[
            skill("Node.js", Icon::Server),
            skill("Express", Icon::Server),
            skill("MongoDB", Icon::Database),
            skill("JWT Auth", Icon::Server),
            skill("REST APIs", Icon::Server),
        ],
    },
    SkillCategory {
        title: "Cloud & Tools",
        icon: Icon::Cloud,
        skills: &[
            skill("Docker", Icon::Cloud),
            skill("Git/GitLab", Icon::Code),
            skill("CI/CD", Icon::Cloud),
            skill("Agile Scrum", Icon::Layout),
            skill("AWS (en cours)", Icon::Cloud),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_have_code_links() {
        for project in PROJECTS {
            assert!(!project.tags.is_empty(), "{} has no tags", project.title);
            assert!(
                project.links.iter().any(|l| l.kind == LinkKind::Code),
                "{} has no code link",
                project.title
            );
            assert!(project.links.iter().all(|l| l.href.starts_with("https://")));
        }
    }

    #[test]
    fn test_skill_categories() {
        let titles: Vec<_> = SKILL_CATEGORIES.iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Front-End", "Back-End", "Cloud & Tools"]);
        assert!(SKILL_CATEGORIES.iter().all(|c| c.skills.len() == 5));
    }

    #[test]
    fn test_profile_links() {
        assert_eq!(PROFILE.mailto(), "mailto:isaac.hassani@limayrac.fr");
        assert!(PROFILE.phone_uri.starts_with("tel:+33"));
        assert!(FEATURED_PROJECT.brief.file_name.ends_with(".pdf"));
    }
}
