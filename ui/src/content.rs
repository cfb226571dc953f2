//! Static page content. Nothing here changes after startup.

use crate::components::icons::Icon;

pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub title: &'static str,
    pub pitch: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
}

pub struct Job {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub repository: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

pub struct SkillCategory {
    pub category: &'static str,
    pub items: &'static [&'static str],
    pub icon: Icon,
    pub accent: Accent,
}

/// Colour family for a card. Class strings stay literal so Tailwind can see them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Blue,
    Purple,
    Green,
    Red,
}

impl Accent {
    pub fn text(self) -> &'static str {
        match self {
            Accent::Cyan => "text-cyan-400",
            Accent::Blue => "text-blue-400",
            Accent::Purple => "text-purple-400",
            Accent::Green => "text-green-400",
            Accent::Red => "text-red-400",
        }
    }

    pub fn hover_text(self) -> &'static str {
        match self {
            Accent::Cyan => "group-hover:text-cyan-400",
            Accent::Blue => "group-hover:text-blue-400",
            Accent::Purple => "group-hover:text-purple-400",
            Accent::Green => "group-hover:text-green-400",
            Accent::Red => "group-hover:text-red-400",
        }
    }

    pub fn card_hover(self) -> &'static str {
        match self {
            Accent::Cyan => "hover:border-cyan-500/50 hover:shadow-cyan-500/10",
            Accent::Blue => "hover:border-blue-500/50 hover:shadow-blue-500/10",
            Accent::Purple => "hover:border-purple-500/50 hover:shadow-purple-500/10",
            Accent::Green => "hover:border-green-500/50 hover:shadow-green-500/10",
            Accent::Red => "hover:border-red-500/50 hover:shadow-red-500/10",
        }
    }

    pub fn item_hover(self) -> &'static str {
        match self {
            Accent::Cyan => "hover:border-cyan-500/30",
            Accent::Blue => "hover:border-blue-500/30",
            Accent::Purple => "hover:border-purple-500/30",
            Accent::Green => "hover:border-green-500/30",
            Accent::Red => "hover:border-red-500/30",
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Accent::Cyan => "text-cyan-300/80 bg-cyan-950/30",
            Accent::Blue => "text-blue-300/80 bg-blue-950/30",
            Accent::Purple => "text-purple-300/80 bg-purple-950/30",
            Accent::Green => "text-green-300/80 bg-green-950/30",
            Accent::Red => "text-red-300/80 bg-red-950/30",
        }
    }
}

pub const PROFILE: Profile = Profile {
    first_name: "Yash",
    last_name: "Rupani",
    title: "Software & Data Engineer",
    pitch: "I architect scalable ETL pipelines, optimize backend systems, and build robust data \
            infrastructure on AWS & GCP. Passionate about turning raw data into actionable insights.",
    location: "Corvallis, OR",
    phone: "+1 541-250-1204",
    email: "rupaniyash1818@gmail.com",
    github: "https://github.com/rupaniyash",
    linkedin: "https://www.linkedin.com/in/yash-rupani-/",
};

pub const ABOUT: &[&str] = &[
    "I am a passionate Software and Data Engineer based in Corvallis, Oregon. My journey involves \
     designing scalable ETL pipelines and backend architectures that power data-driven decision-making.",
    "With a strong foundation in Python, SQL, and Distributed Computing, I enjoy tackling complex data \
     challenges, whether it's optimizing search algorithms with RAG or processing streaming sensor data \
     in real-time.",
    "When I'm not writing code, I'm likely analyzing data trends or exploring the latest developments \
     in Cloud Computing and AI.",
];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Master of Engineering in Computer Science",
        school: "Oregon State University",
        period: "2023 - 2025",
    },
    Education {
        degree: "Bachelor of Technology in Electrical Engineering",
        school: "Pandit Deendayal Energy University",
        period: "2017 - 2021",
    },
];

pub const JOBS: &[Job] = &[
    Job {
        role: "Intern AI Agent Graph RAG / ML Scientist",
        company: "GrantAide",
        period: "Jul 2025 - Sept 2025",
        description: &[
            "Optimized backend systems using Flask and Firestore, improving performance by 30%.",
            "Implemented RAG with FAISS vector DBs, boosting search accuracy by 40%.",
            "Deployed cloud apps on GCP/AWS with 99.9% uptime.",
        ],
    },
    Job {
        role: "Teaching Assistant (Business Analytics)",
        company: "Oregon State University",
        period: "Apr 2025 - Jun 2025",
        description: &[
            "Led Python-based data wrangling for industry projects (Trailblazers, Port of Portland).",
            "Improved data accuracy by 25% using Pandas/NumPy.",
            "Coordinated academic-industry partnerships for 15+ students.",
        ],
    },
    Job {
        role: "Sr. Systems Engineer - Data Engineering",
        company: "Infosys",
        period: "Jun 2021 - Jun 2023",
        description: &[
            "Streamlined data quality pipelines, reducing validation time by 35%.",
            "Designed ETL workflows for user behavior data, improving efficiency by 40%.",
            "Automated pipeline infrastructure scripts, cutting operational overhead by 30%.",
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "YouTube Data Engineering",
        description: "Designed a secure and scalable ETL pipeline to process YouTube trending video data. \
                      Leveraged AWS Cloud (S3, Glue, Athena) to ingest structured and semi-structured data, \
                      enabling analytics on video categories and engagement metrics.",
        tags: &["AWS S3", "AWS Glue", "AWS Athena", "Python", "QuickSight"],
        repository: "https://github.com/rupaniyash/youtube-data-engineering-project",
        icon: Icon::TrendingUp,
        accent: Accent::Red,
    },
    Project {
        title: "Financial News Sentiment Analysis",
        description: "Developed an NLP-driven analysis tool to gauge market sentiment from financial news streams. \
                      Utilized Python and machine learning libraries to classify news sentiment, providing \
                      actionable insights for market trend prediction.",
        tags: &["Python", "NLP", "Scikit-learn", "Pandas", "Sentiment Analysis"],
        repository: "https://github.com/rupaniyash/Financial-Markets-News-Sentiment-Analysis",
        icon: Icon::LineChart,
        accent: Accent::Green,
    },
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        category: "Languages",
        items: &["Python", "SQL", "Flask", "Shell Scripting"],
        icon: Icon::Code,
        accent: Accent::Cyan,
    },
    SkillCategory {
        category: "Big Data",
        items: &["Apache Spark", "PySpark", "Kafka", "Airflow", "Hadoop", "Snowflake"],
        icon: Icon::Server,
        accent: Accent::Blue,
    },
    SkillCategory {
        category: "Cloud & DB",
        items: &["AWS (S3, EMR, Lambda)", "GCP (BigQuery)", "PostgreSQL", "MongoDB", "Firestore"],
        icon: Icon::Cloud,
        accent: Accent::Purple,
    },
    SkillCategory {
        category: "DevOps & ML",
        items: &["Docker", "Git/GitHub", "Pandas & NumPy", "RAG / FAISS", "Tableau"],
        icon: Icon::Terminal,
        accent: Accent::Green,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_populated() {
        assert_eq!(JOBS.len(), 3);
        assert!(JOBS.iter().all(|j| !j.description.is_empty()));
        assert_eq!(PROJECTS.len(), 2);
        assert_eq!(SKILLS.len(), 4);
        assert_eq!(EDUCATION.len(), 2);
    }

    #[test]
    fn outbound_links_are_absolute() {
        assert!(PROFILE.github.starts_with("https://"));
        assert!(PROFILE.linkedin.starts_with("https://"));
        assert!(PROJECTS.iter().all(|p| p.repository.starts_with("https://github.com/")));
        assert_eq!(PROFILE.mailto(), "mailto:rupaniyash1818@gmail.com");
    }
}
