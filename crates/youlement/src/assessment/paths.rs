use serde::Serialize;

/// A concrete career direction recommended for an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub title: &'static str,
    pub description: &'static str,
    pub required_skills: &'static [&'static str],
    pub next_steps: &'static [&'static str],
    pub communities: &'static [&'static str],
}

/// Career paths recommended for `archetype_id`; empty for unknown archetypes.
pub fn career_paths(archetype_id: &str) -> &'static [CareerPath] {
    match archetype_id {
        "synthesizer" => SYNTHESIZER,
        "creator" => CREATOR,
        "coach" => COACH,
        "leader" => LEADER,
        "analyst" => ANALYST,
        "communicator" => COMMUNICATOR,
        "builder" => BUILDER,
        "explorer" => EXPLORER,
        "harmonizer" => HARMONIZER,
        _ => &[],
    }
}

const SYNTHESIZER: &[CareerPath] = &[
    CareerPath {
        title: "Strategic Business Analysis",
        description: "Bridge business and technology to drive strategic decisions",
        required_skills: &["Data analysis", "Business strategy", "Communication", "Systems thinking"],
        next_steps: &[
            "Get certified in business analysis",
            "Learn SQL and data visualization",
            "Join strategic planning projects",
        ],
        communities: &["International Institute of Business Analysis", "Strategic Planning Society"],
    },
    CareerPath {
        title: "Product Management",
        description: "Guide product strategy and connect user needs with business goals",
        required_skills: &["User research", "Agile methodology", "Data analysis", "Stakeholder management"],
        next_steps: &[
            "Complete product management course",
            "Build portfolio of product case studies",
            "Practice product metrics",
        ],
        communities: &["Product Management Community", "Mind the Product"],
    },
    CareerPath {
        title: "Management Consulting",
        description: "Solve complex business problems across industries",
        required_skills: &["Problem solving", "Presentation skills", "Industry knowledge", "Project management"],
        next_steps: &[
            "Develop case study skills",
            "Build consulting methodology knowledge",
            "Network with consultants",
        ],
        communities: &["Management Consulting Network", "Case Interview Community"],
    },
];

const CREATOR: &[CareerPath] = &[
    CareerPath {
        title: "Creative Direction",
        description: "Lead creative vision and guide artistic teams",
        required_skills: &["Design thinking", "Team leadership", "Brand strategy", "Creative software"],
        next_steps: &[
            "Build creative portfolio",
            "Learn team management skills",
            "Study brand strategy",
        ],
        communities: &["Creative Directors Network", "Design Leadership Forum"],
    },
    CareerPath {
        title: "UX/Product Design",
        description: "Design user-centered digital experiences",
        required_skills: &["User research", "Prototyping", "Design systems", "Usability testing"],
        next_steps: &["Complete UX design course", "Build design portfolio", "Learn design tools"],
        communities: &["UX Mastery Community", "Interaction Design Association"],
    },
    CareerPath {
        title: "Content Strategy",
        description: "Create compelling content that drives engagement",
        required_skills: &["Content planning", "SEO", "Analytics", "Brand voice"],
        next_steps: &[
            "Build content portfolio",
            "Learn content marketing",
            "Study audience analysis",
        ],
        communities: &["Content Marketing Institute", "Content Strategy Alliance"],
    },
];

const COACH: &[CareerPath] = &[
    CareerPath {
        title: "Organizational Development",
        description: "Help organizations improve culture and effectiveness",
        required_skills: &[
            "Change management",
            "Group facilitation",
            "Organizational psychology",
            "Assessment tools",
        ],
        next_steps: &[
            "Get OD certification",
            "Learn change management frameworks",
            "Practice facilitation",
        ],
        communities: &["Organization Development Network", "Association for Talent Development"],
    },
    CareerPath {
        title: "Executive Coaching",
        description: "Guide leaders to achieve their potential",
        required_skills: &[
            "Active listening",
            "Leadership assessment",
            "Goal setting",
            "Emotional intelligence",
        ],
        next_steps: &[
            "Get coaching certification",
            "Build coaching practice",
            "Study leadership models",
        ],
        communities: &["International Coach Federation", "Center for Executive Coaching"],
    },
    CareerPath {
        title: "Learning & Development",
        description: "Design and deliver training programs",
        required_skills: &[
            "Instructional design",
            "Adult learning",
            "Training delivery",
            "Learning technology",
        ],
        next_steps: &[
            "Learn instructional design",
            "Build training portfolio",
            "Study learning theories",
        ],
        communities: &["Association for Talent Development", "eLearning Guild"],
    },
];

const LEADER: &[CareerPath] = &[
    CareerPath {
        title: "Executive Leadership",
        description: "Drive organizational vision and strategic direction",
        required_skills: &["Strategic thinking", "Team building", "Decision making", "Financial acumen"],
        next_steps: &[
            "Develop leadership philosophy",
            "Gain P&L experience",
            "Build executive presence",
        ],
        communities: &["Young Entrepreneur Organization", "Executive Leadership Institute"],
    },
    CareerPath {
        title: "Entrepreneurship",
        description: "Build and scale innovative businesses",
        required_skills: &["Risk management", "Market analysis", "Fundraising", "Product development"],
        next_steps: &["Validate business ideas", "Build MVP", "Network with investors"],
        communities: &["Entrepreneurs Organization", "Startup Communities"],
    },
];

const ANALYST: &[CareerPath] = &[
    CareerPath {
        title: "Data Science",
        description: "Extract insights from complex datasets",
        required_skills: &[
            "Statistical analysis",
            "Programming",
            "Machine learning",
            "Data visualization",
        ],
        next_steps: &["Learn Python/R", "Build data portfolio", "Practice with real datasets"],
        communities: &["Data Science Society", "Kaggle Community"],
    },
    CareerPath {
        title: "Research & Strategy",
        description: "Conduct deep analysis to inform decisions",
        required_skills: &[
            "Research methodology",
            "Critical thinking",
            "Report writing",
            "Market analysis",
        ],
        next_steps: &[
            "Build research portfolio",
            "Learn advanced analytics",
            "Study industry trends",
        ],
        communities: &["Market Research Society", "Strategic Planning Institute"],
    },
];

const COMMUNICATOR: &[CareerPath] = &[
    CareerPath {
        title: "Content Marketing",
        description: "Create compelling content that drives engagement",
        required_skills: &["Content strategy", "SEO", "Social media", "Brand storytelling"],
        next_steps: &[
            "Build content portfolio",
            "Learn marketing automation",
            "Study brand strategy",
        ],
        communities: &["Content Marketing Institute", "Marketing Professionals Network"],
    },
    CareerPath {
        title: "Public Relations",
        description: "Manage brand reputation and media relationships",
        required_skills: &["Media relations", "Crisis communication", "Event planning", "Writing"],
        next_steps: &["Build PR portfolio", "Practice media pitching", "Study crisis management"],
        communities: &["Public Relations Society", "Communications Professionals"],
    },
];

const BUILDER: &[CareerPath] = &[
    CareerPath {
        title: "Software Engineering",
        description: "Design and build scalable software systems",
        required_skills: &["Programming languages", "System design", "Testing", "DevOps"],
        next_steps: &[
            "Build coding portfolio",
            "Learn system architecture",
            "Practice algorithms",
        ],
        communities: &["Stack Overflow", "Developer Community"],
    },
    CareerPath {
        title: "Project Management",
        description: "Lead complex projects from conception to delivery",
        required_skills: &[
            "Project planning",
            "Risk management",
            "Team coordination",
            "Agile methodology",
        ],
        next_steps: &[
            "Get PMP certification",
            "Lead project initiatives",
            "Learn agile frameworks",
        ],
        communities: &["Project Management Institute", "Scrum Alliance"],
    },
];

const EXPLORER: &[CareerPath] = &[
    CareerPath {
        title: "Business Development",
        description: "Identify and pursue new market opportunities",
        required_skills: &[
            "Market research",
            "Relationship building",
            "Negotiation",
            "Strategic partnerships",
        ],
        next_steps: &[
            "Build network in target industries",
            "Learn sales techniques",
            "Study market trends",
        ],
        communities: &["Business Development Network", "Sales Professionals Association"],
    },
    CareerPath {
        title: "International Consulting",
        description: "Solve business challenges across global markets",
        required_skills: &[
            "Cultural intelligence",
            "Problem solving",
            "Language skills",
            "Travel flexibility",
        ],
        next_steps: &[
            "Gain international experience",
            "Learn consulting frameworks",
            "Build cultural competency",
        ],
        communities: &["International Association of Consultants", "Global Business Network"],
    },
];

const HARMONIZER: &[CareerPath] = &[
    CareerPath {
        title: "Operations Management",
        description: "Optimize processes and ensure smooth operations",
        required_skills: &[
            "Process improvement",
            "Quality management",
            "Supply chain",
            "Team coordination",
        ],
        next_steps: &[
            "Learn Lean Six Sigma",
            "Study operations frameworks",
            "Practice process mapping",
        ],
        communities: &["Operations Management Society", "Lean Enterprise Institute"],
    },
    CareerPath {
        title: "Program Management",
        description: "Coordinate multiple projects and initiatives",
        required_skills: &[
            "Portfolio management",
            "Stakeholder alignment",
            "Resource planning",
            "Communication",
        ],
        next_steps: &[
            "Get program management certification",
            "Lead multi-project initiatives",
            "Build stakeholder skills",
        ],
        communities: &["Program Management Institute", "Portfolio Management Association"],
    },
];
