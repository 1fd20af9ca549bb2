// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

// Fixed illustrative data for the read-only panes. Nothing here is
// sourced from a live system.

use crate::model::{
    AdvancedTopic, ChallengeCard, ClusterResource, ImageRecord, ImageStatus, PipelineStage,
    QuickStat, ResourceKind, StageStatus, StrategyCard,
};

pub fn pipeline_stages() -> &'static [PipelineStage] {
    PIPELINE_STAGES
}

pub fn image_records() -> &'static [ImageRecord] {
    IMAGE_RECORDS
}

pub fn cluster_resources() -> &'static [ClusterResource] {
    CLUSTER_RESOURCES
}

pub fn quick_stats() -> &'static [QuickStat] {
    QUICK_STATS
}

pub fn advanced_topics() -> &'static [AdvancedTopic] {
    ADVANCED_TOPICS
}

pub fn strategies() -> &'static [StrategyCard] {
    STRATEGIES
}

pub fn challenges() -> &'static [ChallengeCard] {
    CHALLENGES
}

pub fn best_practices() -> &'static [&'static str] {
    BEST_PRACTICES
}

static PIPELINE_STAGES: &[PipelineStage] = &[
    PipelineStage {
        name: "Source",
        status: StageStatus::Success,
        duration: "2s",
    },
    PipelineStage {
        name: "Build",
        status: StageStatus::Success,
        duration: "45s",
    },
    PipelineStage {
        name: "Test",
        status: StageStatus::Success,
        duration: "120s",
    },
    PipelineStage {
        name: "Scan",
        status: StageStatus::Success,
        duration: "30s",
    },
    PipelineStage {
        name: "Deploy Dev",
        status: StageStatus::Success,
        duration: "60s",
    },
    PipelineStage {
        name: "Deploy Staging",
        status: StageStatus::Pending,
        duration: "-",
    },
];

static IMAGE_RECORDS: &[ImageRecord] = &[
    ImageRecord {
        name: "nodejs-app",
        version: "1.0.2",
        size: "156 MB",
        layers: 12,
        status: ImageStatus::Deployed,
    },
    ImageRecord {
        name: "python-api",
        version: "2.1.0",
        size: "289 MB",
        layers: 15,
        status: ImageStatus::Deployed,
    },
    ImageRecord {
        name: "nginx-proxy",
        version: "1.21",
        size: "45 MB",
        layers: 8,
        status: ImageStatus::Deployed,
    },
    ImageRecord {
        name: "postgres-db",
        version: "14.2",
        size: "312 MB",
        layers: 10,
        status: ImageStatus::Deployed,
    },
];

static CLUSTER_RESOURCES: &[ClusterResource] = &[
    ClusterResource {
        name: "api-service",
        kind: ResourceKind::Deployment,
        status: "Running",
        replicas: "3/3",
        cpu: "245m",
        memory: "512Mi",
    },
    ClusterResource {
        name: "web-frontend",
        kind: ResourceKind::Deployment,
        status: "Running",
        replicas: "5/5",
        cpu: "128m",
        memory: "256Mi",
    },
    ClusterResource {
        name: "database",
        kind: ResourceKind::StatefulSet,
        status: "Running",
        replicas: "1/1",
        cpu: "500m",
        memory: "1Gi",
    },
    ClusterResource {
        name: "cache-redis",
        kind: ResourceKind::StatefulSet,
        status: "Running",
        replicas: "1/1",
        cpu: "100m",
        memory: "256Mi",
    },
];

static QUICK_STATS: &[QuickStat] = &[
    QuickStat {
        label: "active pipelines",
        value: "247",
    },
    QuickStat {
        label: "docker images",
        value: "1,243",
    },
    QuickStat {
        label: "k8s clusters",
        value: "12",
    },
    QuickStat {
        label: "success rate",
        value: "99.8%",
    },
    QuickStat {
        label: "deploys/day",
        value: "342",
    },
];

static ADVANCED_TOPICS: &[AdvancedTopic] = &[
    AdvancedTopic {
        title: "Advanced Jenkins Techniques",
        items: &[
            "Shared Libraries: write reusable pipeline code in Groovy stored in a Git repository",
            "Declarative Pipeline Syntax: use structured syntax for defining pipelines in a Jenkinsfile",
            "Scripted Pipeline: full Groovy language access for complex logic and conditions",
            "Parallel Stages: run multiple stages simultaneously to speed up pipeline execution",
            "Agent Configuration: use different agents (Docker, Kubernetes) for different stages",
            "Credentials Binding: securely inject credentials into build environment variables",
            "Input Steps: pause execution for manual approval with timeout and notification",
            "Post Actions: run cleanup, notifications, and archiving after build completion",
        ],
    },
    AdvancedTopic {
        title: "Container Security Best Practices",
        items: &[
            "Image Scanning: scan Docker images with Trivy, Snyk, or Aqua for vulnerabilities",
            "Runtime Security: use AppArmor or SELinux profiles to restrict container capabilities",
            "Secrets Management: store secrets in HashiCorp Vault, AWS Secrets Manager, Azure Key Vault",
            "Network Policies: restrict network traffic between pods and namespaces",
            "RBAC: implement fine-grained role-based access control at the cluster level",
            "Pod Security: use Pod Security Policies to enforce security standards",
            "Registry Security: private registries with access controls and image signing",
            "Audit Logging: log all API requests and security events in Kubernetes audit logs",
        ],
    },
    AdvancedTopic {
        title: "Performance Optimization",
        items: &[
            "Cache Layers: Docker layer caching and build cache mounts for faster builds",
            "Database Indexing: create proper indexes in databases accessed by microservices",
            "API Optimization: implement pagination, compression, caching headers",
            "Container Limits: set appropriate CPU and memory limits to prevent resource contention",
            "Load Testing: use JMeter, Locust, or K6 to identify performance bottlenecks",
            "Profiling: profile applications to identify CPU, memory, and I/O bottlenecks",
            "Content Delivery: use a CDN for static assets and read replicas for read scaling",
            "Async Processing: use message queues for long-running operations",
        ],
    },
    AdvancedTopic {
        title: "Disaster Recovery & High Availability",
        items: &[
            "Multi-Region Deployment: deploy applications across multiple geographic regions",
            "Database Replication: use primary-replica replication for database failover",
            "Backup Strategy: regular backups with testing and documented recovery procedures",
            "Health Checks: Kubernetes liveness and readiness probes for automatic restarts",
            "Circuit Breakers: stop calling failing services to prevent cascading failures",
            "Canary Releases: gradual rollout with automatic rollback on error detection",
            "Load Balancing: distribute traffic across replicas and regions",
            "Chaos Engineering: test resilience by intentionally injecting failures",
        ],
    },
];

static STRATEGIES: &[StrategyCard] = &[
    StrategyCard {
        name: "Rolling Update",
        description: "Gradually replace old instances with new ones",
        benefits: &["Zero downtime", "Easy rollback", "Gradual rollout"],
        risks: &["Two versions running", "Database migration complexity"],
    },
    StrategyCard {
        name: "Blue-Green Deployment",
        description: "Maintain two identical environments",
        benefits: &["Instant switching", "Easy rollback", "Full testing"],
        risks: &["Double resource cost", "Database synchronization"],
    },
    StrategyCard {
        name: "Canary Release",
        description: "Route a percentage of traffic to the new version",
        benefits: &["Detect issues early", "Controlled rollout", "Minimize impact"],
        risks: &["Complex monitoring", "Session handling"],
    },
    StrategyCard {
        name: "Feature Flags",
        description: "Enable or disable features without deployment",
        benefits: &["Fast rollback", "A/B testing", "Decoupled deployment"],
        risks: &["Code complexity", "Technical debt"],
    },
];

static CHALLENGES: &[ChallengeCard] = &[
    ChallengeCard {
        challenge: "Slow Build Times",
        causes: "Large codebases, inefficient Docker layers, slow test suites",
        solutions: &[
            "Parallelize build stages in Jenkins",
            "Optimize the Docker build cache",
            "Split tests into fast and slow suites",
            "Use build artifact caching",
        ],
    },
    ChallengeCard {
        challenge: "Production Incidents",
        causes: "Inadequate testing, configuration issues, resource limits",
        solutions: &[
            "Implement comprehensive test coverage",
            "Use staging environments matching production",
            "Monitor resources proactively",
            "Use canary deployments",
        ],
    },
    ChallengeCard {
        challenge: "Microservices Complexity",
        causes: "Service discovery, distributed transactions, debugging",
        solutions: &[
            "Use Kubernetes service discovery",
            "Implement distributed tracing",
            "Use the Saga pattern for transactions",
            "Centralize logging with ELK or Splunk",
        ],
    },
    ChallengeCard {
        challenge: "Security Vulnerabilities",
        causes: "Unpatched dependencies, weak access controls, exposed secrets",
        solutions: &[
            "Scan images with Trivy or Snyk",
            "Implement RBAC in Kubernetes",
            "Use secret management tools",
            "Run regular security audits",
        ],
    },
    ChallengeCard {
        challenge: "Cost Overruns",
        causes: "Oversized containers, unused resources, inefficient storage",
        solutions: &[
            "Right-size container requests and limits",
            "Use the Vertical Pod Autoscaler",
            "Implement cluster autoscaling",
            "Run regular cost analysis and optimization",
        ],
    },
    ChallengeCard {
        challenge: "Team Knowledge Gaps",
        causes: "New technologies, lack of documentation, rapid changes",
        solutions: &[
            "Create runbooks and playbooks",
            "Conduct regular training sessions",
            "Establish a center of excellence",
            "Share knowledge through documentation",
        ],
    },
];

static BEST_PRACTICES: &[&str] = &[
    "Automate Everything: build, test, deploy, and monitoring",
    "Infrastructure as Code: version control all infrastructure",
    "Immutable Infrastructure: replace, not update, servers",
    "Fail Fast: catch issues early in the pipeline",
    "Monitoring & Observability: comprehensive visibility",
    "Incident Response: documented playbooks and rotations",
    "Security First: security in every stage of the pipeline",
    "Containerize Applications: consistency across environments",
    "Orchestrate Containers: use Kubernetes for production",
    "Version Everything: code, configs, infrastructure, docs",
    "Environment Parity: match dev/staging/prod environments",
    "Continuous Testing: unit, integration, end-to-end tests",
    "Code Review: all changes reviewed before merge",
    "Automated Rollback: detect and revert bad deployments",
    "Team Communication: chat integrations, clear notifications",
    "Runbooks & Playbooks: document procedures and responses",
    "Regular Backups: test restore procedures regularly",
    "Secrets Management: never hardcode sensitive data",
    "Resource Limits: prevent resource contention",
    "Performance Testing: load testing before production",
    "Canary Testing: gradual rollout with monitoring",
    "Post-Mortems: learn from incidents without blame",
    "Documentation: keep docs updated with code",
    "Training & Development: invest in team skills",
    "Tools Standardization: consistent tooling across teams",
    "Database Migrations: automated, reversible, tested",
    "Service Mesh: advanced traffic management",
    "GitOps: Git as the single source of truth",
    "Chaos Engineering: test resilience intentionally",
    "Continuous Learning: stay updated with new practices",
];
