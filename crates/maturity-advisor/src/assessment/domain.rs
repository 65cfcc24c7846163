use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Capability domain used to group questions, rules and recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Infrastructure")]
    Infrastructure,
    #[serde(rename = "Data & Intelligence")]
    DataIntelligence,
    #[serde(rename = "Automation & AI")]
    AutomationAi,
    #[serde(rename = "Customer & Market")]
    CustomerMarket,
    #[serde(rename = "Strategy & Governance")]
    StrategyGovernance,
    #[serde(rename = "People & Collaboration")]
    PeopleCollaboration,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Infrastructure,
        Category::DataIntelligence,
        Category::AutomationAi,
        Category::CustomerMarket,
        Category::StrategyGovernance,
        Category::PeopleCollaboration,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Infrastructure => "Infrastructure",
            Self::DataIntelligence => "Data & Intelligence",
            Self::AutomationAi => "Automation & AI",
            Self::CustomerMarket => "Customer & Market",
            Self::StrategyGovernance => "Strategy & Governance",
            Self::PeopleCollaboration => "People & Collaboration",
        }
    }

    /// Abbreviated label used by compact terminal output.
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Infrastructure => "Infra.",
            Self::DataIntelligence => "Data",
            Self::AutomationAi => "Auto/AI",
            Self::CustomerMarket => "Customer",
            Self::StrategyGovernance => "Strategy",
            Self::PeopleCollaboration => "People",
        }
    }

    /// Nominal ceiling for the category. The six ceilings add up to 103 and People &
    /// Collaboration can actually accumulate 15, so breakdowns cap their percentage.
    pub const fn max_points(self) -> u32 {
        match self {
            Self::Infrastructure => 23,
            Self::DataIntelligence => 16,
            Self::AutomationAi => 18,
            Self::CustomerMarket => 16,
            Self::StrategyGovernance => 16,
            Self::PeopleCollaboration => 14,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The nineteen yes/no diagnostic questions, in questionnaire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Question {
    Cloud,
    Security,
    Backup,
    MobileAccess,
    Analytics,
    DataManagement,
    PerformanceTracking,
    Automation,
    AiTools,
    Agile,
    Crm,
    CustomerPlatform,
    DigitalMarketing,
    Strategy,
    Leadership,
    Governance,
    Training,
    Collaboration,
    RemoteWork,
}

impl Question {
    pub const ALL: [Question; 19] = [
        Question::Cloud,
        Question::Security,
        Question::Backup,
        Question::MobileAccess,
        Question::Analytics,
        Question::DataManagement,
        Question::PerformanceTracking,
        Question::Automation,
        Question::AiTools,
        Question::Agile,
        Question::Crm,
        Question::CustomerPlatform,
        Question::DigitalMarketing,
        Question::Strategy,
        Question::Leadership,
        Question::Governance,
        Question::Training,
        Question::Collaboration,
        Question::RemoteWork,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Cloud => "cloud",
            Self::Security => "security",
            Self::Backup => "backup",
            Self::MobileAccess => "mobile_access",
            Self::Analytics => "analytics",
            Self::DataManagement => "data_management",
            Self::PerformanceTracking => "performance_tracking",
            Self::Automation => "automation",
            Self::AiTools => "ai_tools",
            Self::Agile => "agile",
            Self::Crm => "crm",
            Self::CustomerPlatform => "customer_platform",
            Self::DigitalMarketing => "digital_marketing",
            Self::Strategy => "strategy",
            Self::Leadership => "leadership",
            Self::Governance => "governance",
            Self::Training => "training",
            Self::Collaboration => "collaboration",
            Self::RemoteWork => "remote_work",
        }
    }

    /// Exact lookup; callers normalise keys taken from people before calling.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|question| question.key() == key)
    }

    pub const fn category(self) -> Category {
        match self {
            Self::Cloud | Self::Security | Self::Backup | Self::MobileAccess => {
                Category::Infrastructure
            }
            Self::Analytics | Self::DataManagement | Self::PerformanceTracking => {
                Category::DataIntelligence
            }
            Self::Automation | Self::AiTools | Self::Agile => Category::AutomationAi,
            Self::Crm | Self::CustomerPlatform | Self::DigitalMarketing => {
                Category::CustomerMarket
            }
            Self::Strategy | Self::Leadership | Self::Governance => Category::StrategyGovernance,
            Self::Training | Self::Collaboration | Self::RemoteWork => {
                Category::PeopleCollaboration
            }
        }
    }

    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Cloud => "Does your business use cloud computing (e.g. AWS, Azure, Google Cloud, Microsoft 365)?",
            Self::Security => "Are active cybersecurity measures in place (firewall, antivirus, MFA, security audits)?",
            Self::Backup => "Are automated data backups maintained on a regular schedule?",
            Self::MobileAccess => "Can employees access business systems securely via mobile devices?",
            Self::Analytics => "Does your business use data analytics tools to support decision-making?",
            Self::DataManagement => "Is business data stored and managed in a centralised, organised system?",
            Self::PerformanceTracking => "Are business KPIs and performance metrics tracked through digital tools?",
            Self::Automation => "Are any repetitive business processes automated (e.g. invoicing, stock alerts, scheduling)?",
            Self::AiTools => "Does your business use any AI-powered tools (chatbots, predictive analytics, AI assistants)?",
            Self::Agile => "Does your team use agile or iterative project management methods (Scrum, Kanban)?",
            Self::Crm => "Do you use a CRM system to manage customer relationships and sales pipelines?",
            Self::CustomerPlatform => "Do customers interact with your business through a digital platform (website, app, portal)?",
            Self::DigitalMarketing => "Do you actively use digital marketing channels (SEO, email, social media, paid ads)?",
            Self::Strategy => "Does your business have a documented digital transformation strategy or roadmap?",
            Self::Leadership => "Does senior leadership actively champion and invest in digital transformation?",
            Self::Governance => "Are formal IT governance policies defined (data privacy, access control, compliance)?",
            Self::Training => "Do employees receive structured training on digital tools and skills?",
            Self::Collaboration => "Do teams use digital collaboration platforms (Teams, Slack, Notion, Google Workspace)?",
            Self::RemoteWork => "Does your business have the infrastructure to support remote or hybrid working?",
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Boolean answers keyed by question. Absent questions read as "no" and unknown keys are
/// dropped on construction, so any mapping the caller holds can be evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, bool>",
    into = "BTreeMap<String, bool>"
)]
pub struct AnswerSet {
    answers: BTreeMap<Question, bool>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every question answered with the same value.
    pub fn uniform(value: bool) -> Self {
        Question::ALL
            .into_iter()
            .map(|question| (question, value))
            .collect()
    }

    /// Build from string keys, ignoring anything that is not a recognised question.
    pub fn from_keys<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        pairs
            .into_iter()
            .filter_map(|(key, value)| Question::from_key(key.as_ref()).map(|q| (q, value)))
            .collect()
    }

    pub fn with(mut self, question: Question, value: bool) -> Self {
        self.set(question, value);
        self
    }

    pub fn set(&mut self, question: Question, value: bool) {
        self.answers.insert(question, value);
    }

    pub fn is_yes(&self, question: Question) -> bool {
        self.answers.get(&question).copied().unwrap_or(false)
    }

    /// Number of questions answered "yes".
    pub fn adopted_count(&self) -> usize {
        self.answers.values().filter(|value| **value).count()
    }
}

impl FromIterator<(Question, bool)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (Question, bool)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<String, bool>> for AnswerSet {
    fn from(value: BTreeMap<String, bool>) -> Self {
        Self::from_keys(value)
    }
}

impl From<AnswerSet> for BTreeMap<String, bool> {
    fn from(value: AnswerSet) -> Self {
        value
            .answers
            .into_iter()
            .map(|(question, answer)| (question.key().to_string(), answer))
            .collect()
    }
}

/// Closed list of options for one business profile field.
pub trait ProfileOption: Sized + Copy + 'static {
    /// Field name shown when the value is missing.
    const FIELD: &'static str;
    const OPTIONS: &'static [Self];

    fn label(self) -> &'static str;
    fn id(self) -> &'static str;

    /// Accepts either the display label or the snake_case identifier.
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::OPTIONS.iter().copied().find(|option| {
            option.label().eq_ignore_ascii_case(raw) || option.id().eq_ignore_ascii_case(raw)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    Micro,
    Small,
    Medium,
}

impl ProfileOption for CompanySize {
    const FIELD: &'static str = "Company Size";
    const OPTIONS: &'static [Self] = &[Self::Micro, Self::Small, Self::Medium];

    fn label(self) -> &'static str {
        match self {
            Self::Micro => "Micro (1–9 staff)",
            Self::Small => "Small (10–49 staff)",
            Self::Medium => "Medium (50–249 staff)",
        }
    }

    fn id(self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Small => "small",
            Self::Medium => "medium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    RetailEcommerce,
    Healthcare,
    Manufacturing,
    FinancialServices,
    HospitalityTourism,
    ProfessionalServices,
    Other,
}

impl ProfileOption for Industry {
    const FIELD: &'static str = "Industry Sector";
    const OPTIONS: &'static [Self] = &[
        Self::RetailEcommerce,
        Self::Healthcare,
        Self::Manufacturing,
        Self::FinancialServices,
        Self::HospitalityTourism,
        Self::ProfessionalServices,
        Self::Other,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::RetailEcommerce => "Retail / E-Commerce",
            Self::Healthcare => "Healthcare",
            Self::Manufacturing => "Manufacturing",
            Self::FinancialServices => "Financial Services",
            Self::HospitalityTourism => "Hospitality / Tourism",
            Self::ProfessionalServices => "Professional Services",
            Self::Other => "Other",
        }
    }

    fn id(self) -> &'static str {
        match self {
            Self::RetailEcommerce => "retail_ecommerce",
            Self::Healthcare => "healthcare",
            Self::Manufacturing => "manufacturing",
            Self::FinancialServices => "financial_services",
            Self::HospitalityTourism => "hospitality_tourism",
            Self::ProfessionalServices => "professional_services",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitalBudget {
    Under5k,
    From5kTo20k,
    From20kTo100k,
    Over100k,
}

impl ProfileOption for DigitalBudget {
    const FIELD: &'static str = "Annual Digital Budget";
    const OPTIONS: &'static [Self] = &[
        Self::Under5k,
        Self::From5kTo20k,
        Self::From20kTo100k,
        Self::Over100k,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Under5k => "Under £5,000",
            Self::From5kTo20k => "£5,000 – £20,000",
            Self::From20kTo100k => "£20,000 – £100,000",
            Self::Over100k => "Over £100,000",
        }
    }

    fn id(self) -> &'static str {
        match self {
            Self::Under5k => "under5k",
            Self::From5kTo20k => "from5k_to20k",
            Self::From20kTo100k => "from20k_to100k",
            Self::Over100k => "over100k",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearsOperating {
    UnderTwo,
    TwoToFive,
    SixToFifteen,
    OverFifteen,
}

impl ProfileOption for YearsOperating {
    const FIELD: &'static str = "Years in Operation";
    const OPTIONS: &'static [Self] = &[
        Self::UnderTwo,
        Self::TwoToFive,
        Self::SixToFifteen,
        Self::OverFifteen,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::UnderTwo => "Less than 2 years",
            Self::TwoToFive => "2–5 years",
            Self::SixToFifteen => "6–15 years",
            Self::OverFifteen => "Over 15 years",
        }
    }

    fn id(self) -> &'static str {
        match self {
            Self::UnderTwo => "under_two",
            Self::TwoToFive => "two_to_five",
            Self::SixToFifteen => "six_to_fifteen",
            Self::OverFifteen => "over_fifteen",
        }
    }
}

/// Descriptive business details. Reports echo them back; the rule engine never reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub company_size: CompanySize,
    pub industry: Industry,
    pub budget: DigitalBudget,
    pub years_operating: YearsOperating,
}
