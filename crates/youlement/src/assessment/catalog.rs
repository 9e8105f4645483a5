use std::collections::BTreeSet;
use std::sync::OnceLock;

use serde::Serialize;

/// Reference definition of one career archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub values: Vec<&'static str>,
    pub energizing_tasks: Vec<&'static str>,
    pub strengths: Vec<&'static str>,
    pub work_requirements: Vec<&'static str>,
    pub careers: Vec<&'static str>,
    pub key_traits: Vec<&'static str>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("archetype catalog is empty; matching requires reference data")]
    Empty,
    #[error("archetype id '{0}' is registered more than once")]
    DuplicateId(String),
}

/// Read-only registry of archetypes. Iteration order is registration order and
/// doubles as the ranking tie-break.
#[derive(Debug, Clone)]
pub struct ArchetypeCatalog {
    archetypes: Vec<ArchetypeDefinition>,
}

impl ArchetypeCatalog {
    pub fn new(archetypes: Vec<ArchetypeDefinition>) -> Result<Self, CatalogError> {
        if archetypes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = BTreeSet::new();
        for archetype in &archetypes {
            if !seen.insert(archetype.id) {
                return Err(CatalogError::DuplicateId(archetype.id.to_string()));
            }
        }

        Ok(Self { archetypes })
    }

    /// The nine archetypes shipped with the assessment.
    pub fn standard() -> Self {
        Self {
            archetypes: standard_archetypes(),
        }
    }

    /// Process-wide copy of [`ArchetypeCatalog::standard`], built on first use.
    pub fn shared() -> &'static ArchetypeCatalog {
        static CATALOG: OnceLock<ArchetypeCatalog> = OnceLock::new();
        CATALOG.get_or_init(ArchetypeCatalog::standard)
    }

    pub fn list_archetypes(&self) -> &[ArchetypeDefinition] {
        &self.archetypes
    }

    pub fn get(&self, id: &str) -> Option<&ArchetypeDefinition> {
        self.archetypes.iter().find(|archetype| archetype.id == id)
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}

impl Default for ArchetypeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Shorthand over the shared standard catalog.
pub fn list_archetypes() -> &'static [ArchetypeDefinition] {
    ArchetypeCatalog::shared().list_archetypes()
}

/// Reference data for [`ArchetypeCatalog::standard`]; pass it to
/// [`ArchetypeCatalog::new`] to have it checked at startup.
pub fn standard_archetypes() -> Vec<ArchetypeDefinition> {
    vec![
        ArchetypeDefinition {
            id: "synthesizer",
            name: "The Synthesizer",
            description: "Connects dots across disciplines and finds patterns",
            values: vec!["Innovation", "Learning", "Impact", "Intellectual Challenge"],
            energizing_tasks: vec!["analyzing", "researching", "problem-solving", "strategizing"],
            strengths: vec!["analytical", "strategic", "systems", "critical thinking"],
            work_requirements: vec!["intellectual stimulation", "variety", "autonomy"],
            careers: vec!["Business Analyst", "Product Manager", "Research Director"],
            key_traits: vec![
                "Systems thinking",
                "Pattern recognition",
                "Cross-functional collaboration",
            ],
        },
        ArchetypeDefinition {
            id: "creator",
            name: "The Creator",
            description: "Brings new ideas to life through innovation and artistry",
            values: vec!["Creativity", "Self-expression", "Innovation", "Authenticity"],
            energizing_tasks: vec!["designing", "creating", "brainstorming", "writing"],
            strengths: vec!["creativity", "design", "innovation", "artistic"],
            work_requirements: vec![
                "creative freedom",
                "flexible schedule",
                "inspiring environment",
            ],
            careers: vec!["Creative Director", "UX Designer", "Content Creator"],
            key_traits: vec!["Creativity", "Innovation", "Artistic expression"],
        },
        ArchetypeDefinition {
            id: "coach",
            name: "The Coach",
            description: "Develops others and builds strong relationships",
            values: vec!["Service", "Growth", "Relationships", "Community"],
            energizing_tasks: vec!["teaching", "mentoring", "coaching", "facilitating"],
            strengths: vec!["empathy", "communication", "teaching", "coaching"],
            work_requirements: vec!["people interaction", "meaningful work", "collaboration"],
            careers: vec!["HR Manager", "Life Coach", "Training Director"],
            key_traits: vec!["Empathy", "Teaching", "Relationship building"],
        },
        ArchetypeDefinition {
            id: "leader",
            name: "The Leader",
            description: "Guides vision and drives organizational success",
            values: vec!["Leadership", "Impact", "Achievement", "Influence"],
            energizing_tasks: vec!["leading", "strategizing", "decision-making", "influencing"],
            strengths: vec!["leadership", "strategy", "vision", "influence"],
            work_requirements: vec![
                "leadership opportunities",
                "high impact",
                "decision authority",
            ],
            careers: vec!["Executive", "Team Lead", "Entrepreneur"],
            key_traits: vec!["Leadership", "Vision", "Decision-making"],
        },
        ArchetypeDefinition {
            id: "analyst",
            name: "The Analyst",
            description: "Dives deep into data and complex problems",
            values: vec!["Accuracy", "Logic", "Discovery", "Excellence"],
            energizing_tasks: vec!["analyzing", "researching", "calculating", "investigating"],
            strengths: vec!["analytical", "research", "data", "problem-solving"],
            work_requirements: vec![
                "intellectual challenge",
                "detailed work",
                "quiet environment",
            ],
            careers: vec!["Data Scientist", "Financial Analyst", "Researcher"],
            key_traits: vec!["Analysis", "Research", "Critical thinking"],
        },
        ArchetypeDefinition {
            id: "communicator",
            name: "The Communicator",
            description: "Shares stories and connects with audiences",
            values: vec!["Communication", "Influence", "Connection", "Expression"],
            energizing_tasks: vec!["presenting", "writing", "networking", "storytelling"],
            strengths: vec!["communication", "persuasion", "writing", "presentation"],
            work_requirements: vec!["audience interaction", "variety", "public speaking"],
            careers: vec!["Marketing Manager", "Journalist", "Sales Director"],
            key_traits: vec!["Communication", "Storytelling", "Persuasion"],
        },
        ArchetypeDefinition {
            id: "builder",
            name: "The Builder",
            description: "Creates tangible solutions and systems",
            values: vec!["Craftsmanship", "Results", "Quality", "Progress"],
            energizing_tasks: vec!["building", "implementing", "developing", "executing"],
            strengths: vec!["technical", "implementation", "execution", "practical"],
            work_requirements: vec![
                "hands-on work",
                "measurable results",
                "technical challenges",
            ],
            careers: vec!["Software Engineer", "Project Manager", "Operations Manager"],
            key_traits: vec!["Implementation", "Construction", "Practical solutions"],
        },
        ArchetypeDefinition {
            id: "explorer",
            name: "The Explorer",
            description: "Seeks new experiences and pushes boundaries",
            values: vec!["Adventure", "Freedom", "Discovery", "Growth"],
            energizing_tasks: vec!["exploring", "traveling", "networking", "discovering"],
            strengths: vec!["adaptability", "curiosity", "networking", "innovation"],
            work_requirements: vec!["variety", "travel", "new challenges", "flexibility"],
            careers: vec!["Consultant", "Field Researcher", "Business Development"],
            key_traits: vec!["Adventure", "Discovery", "Risk-taking"],
        },
        ArchetypeDefinition {
            id: "harmonizer",
            name: "The Harmonizer",
            description: "Creates balance and ensures smooth operations",
            values: vec!["Harmony", "Efficiency", "Stability", "Service"],
            energizing_tasks: vec!["organizing", "coordinating", "optimizing", "supporting"],
            strengths: vec!["organization", "coordination", "efficiency", "process"],
            work_requirements: vec![
                "structured environment",
                "team support",
                "clear processes",
            ],
            careers: vec!["Operations Director", "Chief of Staff", "Program Manager"],
            key_traits: vec!["Organization", "Balance", "Process improvement"],
        },
    ]
}
