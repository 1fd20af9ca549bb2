// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::{TheoryBlock, TheoryTopic};

/// Foundational theory topics, in presentation order. Topics toggle
/// through the same expansion set as sections; their ids carry a
/// `theory-` prefix to stay clear of the section namespace.
pub fn theory_topics() -> &'static [TheoryTopic] {
    THEORY_TOPICS
}

static THEORY_TOPICS: &[TheoryTopic] = &[
    TheoryTopic {
        id: "theory-sdlc",
        title: "SDLC Evolution: Waterfall to Agile to DevOps",
        blocks: &[
            TheoryBlock {
                heading: "Traditional Waterfall Model",
                body: "The waterfall model executes sequential phases: requirements, design, implementation, testing, deployment. Issues found late in cycles are expensive to fix, and long release cycles mean delayed feedback.",
            },
            TheoryBlock {
                heading: "Agile Methodology",
                body: "Agile emphasizes iterative development, continuous feedback, and adaptive planning. Sprints of one to four weeks deliver incremental value, and customer collaboration replaces documentation-heavy approaches.",
            },
            TheoryBlock {
                heading: "DevOps vs. Agile",
                body: "While Agile focuses on software development methodology, DevOps extends beyond development to include operations, infrastructure, and deployment automation. DevOps enables Agile teams to ship code to production frequently with confidence.",
            },
        ],
    },
    TheoryTopic {
        id: "theory-cicd",
        title: "CI/CD: Theory & Definitions",
        blocks: &[
            TheoryBlock {
                heading: "Continuous Integration",
                body: "CI is the practice of merging code changes frequently, multiple times daily, into a central repository where automated builds and tests run. Benefits: early defect detection, reduced integration issues, faster feedback loops.",
            },
            TheoryBlock {
                heading: "Continuous Delivery",
                body: "CD extends CI by automating the release process up to production. Code is deployable at any time, but deployment requires manual approval. Automation reduces deployment friction and risk.",
            },
            TheoryBlock {
                heading: "Continuous Deployment",
                body: "Continuous Deployment automatically deploys every validated change to production. It requires high confidence in testing and monitoring, and enables rapid iteration and immediate customer feedback.",
            },
            TheoryBlock {
                heading: "Fast Feedback Loops",
                body: "Developers should know build and test results within 10-15 minutes. Rapid feedback enables quick remediation and prevents broken code from accumulating.",
            },
        ],
    },
    TheoryTopic {
        id: "theory-jenkins",
        title: "Jenkins: Architecture Theory",
        blocks: &[
            TheoryBlock {
                heading: "Master-Agent Architecture",
                body: "Jenkins uses a master-agent architecture. The master schedules jobs, manages the UI, and delegates execution to agents, which are autonomous systems that execute build steps. The distributed design enables horizontal scaling.",
            },
            TheoryBlock {
                heading: "Pipeline as Code",
                body: "Pipeline definitions are version-controlled code. Declarative pipelines provide structured syntax; scripted pipelines offer Groovy flexibility. Pipelines become repeatable, auditable, and testable.",
            },
            TheoryBlock {
                heading: "Webhook Mechanism",
                body: "Webhooks enable event-driven builds. When code is pushed to Git, a webhook triggers Jenkins to fetch code and start the build. This eliminates polling overhead and gives developers immediate feedback.",
            },
        ],
    },
    TheoryTopic {
        id: "theory-microservices",
        title: "Microservices: Architecture Theory",
        blocks: &[
            TheoryBlock {
                heading: "Definition & Core Concept",
                body: "Microservices architecture decomposes applications into loosely coupled, independently deployable services. Each service owns its data layer, business logic, and API, and communicates via well-defined interfaces such as REST, gRPC, or messaging.",
            },
            TheoryBlock {
                heading: "Monolith vs. Microservices",
                body: "Monoliths are single units; changes require full recompilation and redeployment. Microservices enable independent scaling, technology diversity, and organizational alignment (Conway's Law: system architecture mirrors organizational structure).",
            },
            TheoryBlock {
                heading: "Distributed Systems Challenges",
                body: "Network latency, partial failures, and eventual consistency complicate distributed systems. They require sophisticated monitoring, error handling, and failure scenario testing.",
            },
            TheoryBlock {
                heading: "CQRS",
                body: "Command Query Responsibility Segregation separates read and write models. Different datastores optimize for their respective access patterns, enabling independent scaling of reads and writes.",
            },
            TheoryBlock {
                heading: "Event Sourcing",
                body: "Events represent state changes, and the system maintains the event log as the single source of truth. Current state is derived by replaying events, which enables audit trails, debugging, and temporal queries.",
            },
        ],
    },
    TheoryTopic {
        id: "theory-docker",
        title: "Docker: Containerization Theory",
        blocks: &[
            TheoryBlock {
                heading: "Containerization Concept",
                body: "Containers package application code, runtime, dependencies, and configuration into a standardized unit. They are lightweight compared to VMs (no guest OS) and provide consistency: if it works locally, it works in production.",
            },
            TheoryBlock {
                heading: "Layered Filesystem",
                body: "Docker images consist of layers; each Dockerfile instruction creates one. Layers are cached and reused, accelerating builds. The final container unions all layers into a unified filesystem.",
            },
            TheoryBlock {
                heading: "Image Registries",
                body: "Registries store and distribute images: public ones like Docker Hub and private ones like ECR, ACR, or Harbor. Images are tagged name:version for versioning and reproducibility.",
            },
            TheoryBlock {
                heading: "Multi-Stage Builds",
                body: "A multi-stage Dockerfile uses multiple FROM statements. The build stage includes compilers and build tools; the runtime stage includes only what the application needs, dramatically reducing final image size.",
            },
            TheoryBlock {
                heading: "Networking Model",
                body: "Containers have isolated network namespaces and communicate via exposed ports. Docker networks enable service discovery using container names as DNS.",
            },
        ],
    },
    TheoryTopic {
        id: "theory-kubernetes",
        title: "Kubernetes: Orchestration Theory",
        blocks: &[
            TheoryBlock {
                heading: "Container Orchestration",
                body: "Kubernetes automates container deployment, scaling, and management across clusters. The model is declarative: specify desired state, and Kubernetes converges actual state to it.",
            },
            TheoryBlock {
                heading: "Control Plane",
                body: "Control plane components (API server, scheduler, controller manager, etcd) manage cluster state. The API server is the central hub; etcd is a distributed key-value store persisting cluster state.",
            },
            TheoryBlock {
                heading: "Reconciliation Loops",
                body: "Controllers continuously watch resources. When actual state diverges from desired state, they take corrective action, which enables self-healing such as restarting failed pods.",
            },
            TheoryBlock {
                heading: "Declared State",
                body: "Users declare desired state in YAML manifests and Kubernetes reconciles toward it. Reapplying manifests is safe; updates are idempotent without duplication.",
            },
            TheoryBlock {
                heading: "Service Discovery",
                body: "The Service abstraction provides stable DNS names and IP addresses. Pods are ephemeral; Services provide permanent endpoints, with kube-proxy load balancing across backing pods.",
            },
            TheoryBlock {
                heading: "Resource Quotas",
                body: "Namespaces enforce resource limits at quota level, preventing one team from monopolizing cluster resources and enabling multi-tenancy with isolation.",
            },
        ],
    },
    TheoryTopic {
        id: "theory-testing",
        title: "Testing: Pyramid Model & Types",
        blocks: &[
            TheoryBlock {
                heading: "Test Pyramid",
                body: "Three levels: unit (70%, fast and isolated), integration (20%, component interactions), end-to-end (10%, full workflows). An inverted pyramid with many slow end-to-end tests signals testing problems.",
            },
            TheoryBlock {
                heading: "Unit Tests",
                body: "Test individual functions in isolation, using mocks to isolate dependencies. They run in milliseconds at high frequency.",
            },
            TheoryBlock {
                heading: "Integration Tests",
                body: "Test interaction between components or services, possibly against test databases. They verify API contracts and database operations.",
            },
            TheoryBlock {
                heading: "Contract Tests",
                body: "Verify service-to-service compatibility: the consumer defines expectations of the producer API, preventing integration breakage without full end-to-end testing.",
            },
            TheoryBlock {
                heading: "End-to-End Tests",
                body: "Test complete user workflows with real browser interactions. Slow but they validate the entire system, so their count stays small.",
            },
            TheoryBlock {
                heading: "Coverage",
                body: "Code coverage measures the percentage of code executed by tests. 80-90% is often optimal with diminishing returns beyond; measure coverage of critical paths, not all code.",
            },
        ],
    },
    TheoryTopic {
        id: "theory-iac",
        title: "Infrastructure as Code",
        blocks: &[
            TheoryBlock {
                heading: "Definition",
                body: "IaC treats infrastructure (servers, networking, storage) as versioned code. Infrastructure changes are peer-reviewed, tested, and tracked in version control.",
            },
            TheoryBlock {
                heading: "Benefits",
                body: "Reproducibility: identical infrastructure across environments. Auditability: Git history shows all changes. Testability: validate infrastructure before deployment. Disaster recovery: recreate infrastructure from code.",
            },
            TheoryBlock {
                heading: "Tools & Approaches",
                body: "Terraform (agnostic), CloudFormation (AWS), Bicep (Azure), Pulumi (general-purpose languages). Declarative desired-state versus imperative step-by-step approaches.",
            },
        ],
    },
    TheoryTopic {
        id: "theory-observability",
        title: "Monitoring & Observability",
        blocks: &[
            TheoryBlock {
                heading: "Monitoring vs. Observability",
                body: "Monitoring tracks known, predefined metrics. Observability enables debugging unknown issues through logs, metrics, and traces, and is a prerequisite for understanding complex distributed systems.",
            },
            TheoryBlock {
                heading: "Metrics",
                body: "Time-series numerical data such as CPU, memory, and requests per second. Stored efficiently; they enable alerting and trend analysis.",
            },
            TheoryBlock {
                heading: "Logs",
                body: "Discrete events with context, unstructured or structured (JSON). They enable root cause analysis.",
            },
            TheoryBlock {
                heading: "Traces",
                body: "Request journeys across services showing latency distribution and bottlenecks. Essential for debugging microservices.",
            },
            TheoryBlock {
                heading: "SLOs",
                body: "Service Level Objectives define an acceptable service level, for example 99.9% availability. Error budgets determine acceptable failures and guide deployment caution.",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::theory_topics;
    use crate::catalog::sections;
    use std::collections::BTreeSet;

    #[test]
    fn topic_ids_are_unique_and_prefixed() {
        let ids: BTreeSet<&str> = theory_topics().iter().map(|topic| topic.id).collect();
        assert_eq!(ids.len(), theory_topics().len());
        for id in ids {
            assert!(id.starts_with("theory-"), "unexpected topic id {id}");
        }
    }

    #[test]
    fn topic_ids_do_not_collide_with_section_ids() {
        let section_ids: BTreeSet<&str> = sections().iter().map(|section| section.id).collect();
        for topic in theory_topics() {
            assert!(!section_ids.contains(topic.id));
        }
    }

    #[test]
    fn every_topic_has_blocks() {
        for topic in theory_topics() {
            assert!(!topic.blocks.is_empty(), "{} has no blocks", topic.id);
        }
    }
}
