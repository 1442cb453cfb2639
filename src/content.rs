//! The literal résumé content.

use crate::resume::{Position, Resume};

/// Returns Ross Kuehl's résumé.
pub fn ross_kuehl() -> Resume {
    Resume {
        name: "Ross Kuehl",
        contact: "Remote • rosskuehl@gmail.com",
        target_role: "Target Role: Staff AI Platform Engineer & Agent Orchestration Lead",
        summary: "Full Stack AI Software Engineer with 7+ years of experience building distributed backend systems, AI-enabled applications, REST APIs, and cloud infrastructure. Skilled in Python, C#, React, and AWS with focus on LLM integration, RAG pipelines, and AI agent orchestration. Passionate about scaling intelligent systems from prototype to production.",
        skills: vec![
            "Architectures & Languages: Python, C#, TypeScript/JavaScript, SQL, event-driven design",
            "AI/ML Lifecycle: LLM fine-tuning, agent tooling, RAG pipelines, prompt strategy, vector databases",
            "Backend & Platforms: .NET, FastAPI, Django, gRPC, streaming services, microservices at scale",
            "Frontend & Product: React, design systems, real-time data visualizations",
            "Cloud & DevOps: AWS (Lambda, ECS, S3, API Gateway, SageMaker), Docker, Terraform, CI/CD (GitHub Actions)",
            "Data & Storage: PostgreSQL, DynamoDB, Redis, lakehouse patterns",
            "Delivery Practices: Technical leadership, security-first design, automated testing, observability",
        ],
        experience: vec![
            Position {
                title: "Senior Software Engineer",
                employer: "Stealth Startup",
                period: "Dec 2022 – Present",
                highlights: vec![
                    "Architected cloud-native backend systems using Python and AWS.",
                    "Built REST APIs and AI data pipelines to power automation.",
                    "Integrated LLM services to enhance product intelligence.",
                    "Standardized CI/CD with Docker to improve deployment reliability.",
                ],
            },
            Position {
                title: "Senior Software Engineer",
                employer: "AutoStore",
                period: "Jun 2019 – Dec 2022",
                highlights: vec![
                    "Developed distributed backend services in C# and Python for warehouse automation.",
                    "Optimized API latency and improved system throughput.",
                    "Led AWS migration for legacy systems.",
                    "Mentored developers in testing and system design.",
                ],
            },
            Position {
                title: "Software Engineer",
                employer: "Shaw Industries",
                period: "Jun 2017 – Jun 2019",
                highlights: vec![
                    "Built full-stack apps for manufacturing and logistics.",
                    "Automated reporting, reducing manual effort by 40%.",
                    "Designed SQL schemas and optimized stored procedures.",
                ],
            },
        ],
        education: "Bachelor of Science – Business Administration, Longwood University (May 2017)",
    }
}
