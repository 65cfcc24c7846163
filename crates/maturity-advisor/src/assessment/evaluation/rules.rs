use super::super::domain::{AnswerSet, Category, Question};
use super::{Priority, Recommendation, RuleTraceEntry};
use Category::*;
use Effect::{CriticalGap, Recommend, RiskFlag};
use Priority::{Critical, Important, Optional};
use Question as Q;

/// Predicate over the answer set selecting a rule branch.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Condition {
    Yes(Question),
    AllOf(&'static [Question]),
    NoneOf(&'static [Question]),
    Otherwise,
}

impl Condition {
    pub(crate) fn holds(&self, answers: &AnswerSet) -> bool {
        match self {
            Condition::Yes(question) => answers.is_yes(*question),
            Condition::AllOf(questions) => questions.iter().all(|q| answers.is_yes(*q)),
            Condition::NoneOf(questions) => questions.iter().all(|q| !answers.is_yes(*q)),
            Condition::Otherwise => true,
        }
    }
}

/// Points and trace text recorded when a branch is taken.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Award {
    pub(crate) points: u32,
    pub(crate) description: &'static str,
}

/// Finding emitted alongside a branch.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Effect {
    Recommend(Priority, &'static str),
    RiskFlag(&'static str),
    CriticalGap(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Branch {
    pub(crate) when: Condition,
    pub(crate) award: Option<Award>,
    pub(crate) effects: &'static [Effect],
}

/// A numbered expert rule. Branches are tried in order and the first whose condition holds is
/// taken; when none hold the rule leaves no trace.
#[derive(Debug)]
pub(crate) struct Rule {
    pub(crate) id: u8,
    pub(crate) category: Category,
    pub(crate) branches: &'static [Branch],
}

impl Rule {
    pub(crate) fn select(&self, answers: &AnswerSet) -> Option<&'static Branch> {
        self.branches
            .iter()
            .find(|branch| branch.when.holds(answers))
    }
}

const fn adopted(question: Question, points: u32, description: &'static str) -> Branch {
    Branch {
        when: Condition::Yes(question),
        award: Some(Award {
            points,
            description,
        }),
        effects: &[],
    }
}

const fn bonus(questions: &'static [Question], points: u32, description: &'static str) -> Branch {
    Branch {
        when: Condition::AllOf(questions),
        award: Some(Award {
            points,
            description,
        }),
        effects: &[],
    }
}

/// Unmet branch that still records a zero-point trace entry.
const fn lacking(description: &'static str, effects: &'static [Effect]) -> Branch {
    Branch {
        when: Condition::Otherwise,
        award: Some(Award {
            points: 0,
            description,
        }),
        effects,
    }
}

/// Unmet branch that only emits findings.
const fn silent(effects: &'static [Effect]) -> Branch {
    Branch {
        when: Condition::Otherwise,
        award: None,
        effects,
    }
}

pub(crate) static RULE_TABLE: [Rule; 25] = [
    Rule {
        id: 1,
        category: Infrastructure,
        branches: &[
            adopted(Q::Cloud, 6, "Cloud infrastructure adopted — scalability and remote access enabled."),
            lacking(
                "No cloud adoption — critical scalability gap identified.",
                &[
                    Recommend(Critical, "Migrate to cloud infrastructure (e.g. AWS, Azure, Google Cloud). Even a free-tier start reduces hardware costs and improves resilience."),
                    CriticalGap("Cloud Infrastructure"),
                ],
            ),
        ],
    },
    Rule {
        id: 2,
        category: Infrastructure,
        branches: &[
            adopted(Q::Security, 6, "Active cybersecurity measures — operational risk is controlled."),
            lacking(
                "No cybersecurity — high risk of data breach and legal liability.",
                &[
                    Recommend(Critical, "Implement cybersecurity baseline: firewall, endpoint protection, MFA, and regular security audits. GDPR non-compliance can result in heavy fines."),
                    RiskFlag("Cybersecurity Gap — HIGH RISK"),
                    CriticalGap("Cybersecurity"),
                ],
            ),
        ],
    },
    Rule {
        id: 3,
        category: Infrastructure,
        branches: &[
            adopted(Q::Backup, 4, "Automated backups maintained — data loss risk minimised."),
            lacking(
                "No backup system — data loss risk is significant.",
                &[
                    Recommend(Critical, "Set up automated daily backups using cloud storage (e.g. Backblaze, AWS S3). Data loss can permanently cripple a small business."),
                    RiskFlag("No Backup System — DATA LOSS RISK"),
                ],
            ),
        ],
    },
    // Exactly one of cloud/security matches neither branch and leaves no trace.
    Rule {
        id: 4,
        category: Infrastructure,
        branches: &[
            bonus(
                &[Q::Cloud, Q::Security],
                4,
                "Cloud AND Security active — infrastructure maturity is strong. Bonus awarded.",
            ),
            Branch {
                when: Condition::NoneOf(&[Q::Cloud, Q::Security]),
                award: Some(Award {
                    points: 0,
                    description: "Neither cloud nor security implemented — infrastructure critically underdeveloped.",
                }),
                effects: &[RiskFlag("Infrastructure foundations completely absent")],
            },
        ],
    },
    Rule {
        id: 5,
        category: Infrastructure,
        branches: &[
            adopted(Q::MobileAccess, 3, "Mobile-accessible systems — workforce flexibility supported."),
            lacking(
                "No mobile access — workforce agility is restricted.",
                &[Recommend(Important, "Enable mobile access to key business systems. Remote and field teams require mobile-ready tools to remain productive.")],
            ),
        ],
    },
    Rule {
        id: 6,
        category: DataIntelligence,
        branches: &[
            adopted(Q::Analytics, 5, "Data analytics in use — decisions are evidence-based."),
            lacking(
                "No analytics — decisions are likely based on intuition, reducing accuracy.",
                &[Recommend(Important, "Adopt business intelligence tools (e.g. Google Looker Studio, Power BI). Data-driven decisions improve revenue by up to 23% (McKinsey, 2023).")],
            ),
        ],
    },
    Rule {
        id: 7,
        category: DataIntelligence,
        branches: &[
            adopted(Q::DataManagement, 4, "Centralised data management — data accessibility and quality are ensured."),
            lacking(
                "Data is siloed — inconsistency and duplication likely.",
                &[Recommend(Important, "Implement a centralised data warehouse or cloud database. Data silos prevent analytics and slow operational decisions.")],
            ),
        ],
    },
    Rule {
        id: 8,
        category: DataIntelligence,
        branches: &[
            adopted(Q::PerformanceTracking, 3, "Digital performance tracking active — KPIs are visible and actionable."),
            lacking(
                "No performance tracking — business health is not measurable.",
                &[Recommend(Important, "Deploy KPI dashboards to track sales, customer satisfaction, and operational metrics in real time.")],
            ),
        ],
    },
    Rule {
        id: 9,
        category: DataIntelligence,
        branches: &[bonus(
            &[Q::Analytics, Q::DataManagement],
            4,
            "Analytics AND centralised data both present — full data intelligence capability achieved.",
        )],
    },
    Rule {
        id: 10,
        category: AutomationAi,
        branches: &[
            adopted(Q::Automation, 5, "Process automation adopted — manual workload significantly reduced."),
            lacking(
                "No automation — staff are overloaded with repetitive tasks.",
                &[Recommend(Important, "Automate repetitive workflows using tools like Zapier or Microsoft Power Automate. SMEs recover 20+ hours/week through basic automation.")],
            ),
        ],
    },
    Rule {
        id: 11,
        category: AutomationAi,
        branches: &[
            adopted(Q::AiTools, 5, "AI tools in operations — predictive capability and efficiency enhanced."),
            lacking(
                "No AI adoption — competitive disadvantage growing as AI becomes standard.",
                &[Recommend(Optional, "Explore AI tools for customer service (chatbots), inventory prediction, or marketing automation. Many are affordable for SMEs (e.g. HubSpot AI, Tidio).")],
            ),
        ],
    },
    Rule {
        id: 12,
        category: AutomationAi,
        branches: &[bonus(
            &[Q::Automation, Q::AiTools],
            5,
            "Automation AND AI both implemented — highest operational efficiency tier reached.",
        )],
    },
    Rule {
        id: 13,
        category: AutomationAi,
        branches: &[
            adopted(Q::Agile, 3, "Agile methods adopted — adaptability and project delivery speed improved."),
            silent(&[Recommend(Optional, "Adopt agile project management (Scrum or Kanban) to improve team responsiveness and delivery cycles.")]),
        ],
    },
    Rule {
        id: 14,
        category: CustomerMarket,
        branches: &[
            adopted(Q::Crm, 5, "CRM system in use — customer relationships are systematically managed."),
            lacking(
                "No CRM — customer data is likely scattered, losing revenue opportunities.",
                &[
                    Recommend(Critical, "Implement a CRM system (e.g. HubSpot Free, Zoho CRM). CRM adoption increases customer retention by up to 27% (Gartner, 2024)."),
                    CriticalGap("CRM System"),
                ],
            ),
        ],
    },
    Rule {
        id: 15,
        category: CustomerMarket,
        branches: &[
            adopted(Q::CustomerPlatform, 4, "Digital customer platform active — customer accessibility enhanced."),
            lacking(
                "No digital customer channel — customer experience is limited to offline.",
                &[Recommend(Important, "Build a customer-facing digital portal or website with self-service capability.")],
            ),
        ],
    },
    Rule {
        id: 16,
        category: CustomerMarket,
        branches: &[
            adopted(Q::DigitalMarketing, 3, "Digital marketing in use — customer reach is extended online."),
            lacking(
                "No digital marketing — growth potential is severely limited.",
                &[Recommend(Important, "Invest in digital marketing: SEO, email campaigns, and social media. Cost-effective tools include Mailchimp and Google Ads.")],
            ),
        ],
    },
    Rule {
        id: 17,
        category: CustomerMarket,
        branches: &[bonus(
            &[Q::Crm, Q::DigitalMarketing],
            4,
            "CRM AND digital marketing combined — full customer acquisition-to-retention loop operational.",
        )],
    },
    Rule {
        id: 18,
        category: StrategyGovernance,
        branches: &[
            adopted(Q::Strategy, 5, "Digital strategy defined — transformation has clear direction and milestones."),
            lacking(
                "No digital strategy — investment risks being wasted without direction.",
                &[
                    Recommend(Critical, "Develop a 12-month digital transformation roadmap. Define goals, budget allocation, and success metrics before investing in tools."),
                    CriticalGap("Digital Strategy"),
                ],
            ),
        ],
    },
    Rule {
        id: 19,
        category: StrategyGovernance,
        branches: &[
            adopted(Q::Leadership, 4, "Leadership actively supports digital transformation — organisational alignment ensured."),
            lacking(
                "No leadership buy-in — transformation initiatives are likely to stall.",
                &[
                    Recommend(Critical, "Secure executive sponsorship for digital transformation. Without leadership alignment, 70% of transformation programmes fail (McKinsey, 2023)."),
                    RiskFlag("No Leadership Buy-In — TRANSFORMATION RISK"),
                ],
            ),
        ],
    },
    Rule {
        id: 20,
        category: StrategyGovernance,
        branches: &[
            adopted(Q::Governance, 3, "IT governance in place — technology investments are controlled and compliant."),
            silent(&[Recommend(Optional, "Establish basic IT governance policies covering data privacy, software licensing, and access control.")]),
        ],
    },
    Rule {
        id: 21,
        category: StrategyGovernance,
        branches: &[bonus(
            &[Q::Strategy, Q::Leadership],
            4,
            "Strategy AND leadership aligned — transformation success probability significantly elevated.",
        )],
    },
    Rule {
        id: 22,
        category: PeopleCollaboration,
        branches: &[
            adopted(Q::Training, 4, "Digital training programme active — workforce capability continuously improving."),
            lacking(
                "No digital training — tools adopted without skilled users will underperform.",
                &[Recommend(Important, "Invest in structured digital skills training. Platforms like Google Digital Garage and LinkedIn Learning offer free SME-focused courses.")],
            ),
        ],
    },
    Rule {
        id: 23,
        category: PeopleCollaboration,
        branches: &[
            adopted(Q::Collaboration, 3, "Digital collaboration tools in use — team coordination and communication are efficient."),
            lacking(
                "No collaboration tools — team efficiency is impaired.",
                &[Recommend(Important, "Adopt collaboration platforms (e.g. Microsoft Teams, Slack, Notion) to improve team communication and productivity.")],
            ),
        ],
    },
    Rule {
        id: 24,
        category: PeopleCollaboration,
        branches: &[
            adopted(Q::RemoteWork, 3, "Remote work infrastructure in place — business continuity is protected."),
            silent(&[Recommend(Optional, "Enable remote working capability to attract talent and ensure business continuity during disruptions.")]),
        ],
    },
    Rule {
        id: 25,
        category: PeopleCollaboration,
        branches: &[
            bonus(
                &[Q::Training, Q::Collaboration, Q::Leadership],
                5,
                "Training, Collaboration AND Leadership all present — people-led digital culture fully established. Maximum people maturity bonus awarded.",
            ),
            bonus(
                &[Q::Training, Q::Collaboration],
                2,
                "Training and Collaboration present — strong people capability, but leadership alignment is still needed.",
            ),
        ],
    },
];

/// Running state folded over the rule table.
#[derive(Debug, Default)]
pub(crate) struct RuleLedger {
    pub(crate) score: u32,
    pub(crate) category_scores: Vec<(Category, u32)>,
    pub(crate) trace: Vec<RuleTraceEntry>,
    pub(crate) recommendations: Vec<Recommendation>,
    pub(crate) risk_flags: Vec<String>,
    pub(crate) critical_gaps: Vec<String>,
}

impl RuleLedger {
    fn record(mut self, rule: &Rule, branch: &Branch) -> Self {
        if let Some(award) = branch.award {
            self.score += award.points;
            match self
                .category_scores
                .iter_mut()
                .find(|(category, _)| *category == rule.category)
            {
                Some((_, total)) => *total += award.points,
                None => self.category_scores.push((rule.category, award.points)),
            }
            self.trace.push(RuleTraceEntry {
                id: rule.id,
                description: award.description.to_string(),
                points: award.points,
                category: rule.category,
            });
        }

        for effect in branch.effects {
            match *effect {
                Effect::Recommend(priority, text) => self.recommendations.push(Recommendation {
                    priority,
                    category: rule.category,
                    text: text.to_string(),
                }),
                Effect::RiskFlag(flag) => self.risk_flags.push(flag.to_string()),
                Effect::CriticalGap(gap) => self.critical_gaps.push(gap.to_string()),
            }
        }

        self
    }

    pub(crate) fn critical_count(&self) -> usize {
        self.recommendations
            .iter()
            .filter(|recommendation| recommendation.priority == Priority::Critical)
            .count()
    }
}

pub(crate) fn apply_rules(answers: &AnswerSet) -> RuleLedger {
    RULE_TABLE
        .iter()
        .fold(RuleLedger::default(), |ledger, rule| {
            match rule.select(answers) {
                Some(branch) => ledger.record(rule, branch),
                None => ledger,
            }
        })
}
