// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::{Section, SubSection};

/// The fixed section catalog in declaration order. The slice is `static`,
/// so repeated calls observe the same length and identifier order.
pub fn sections() -> &'static [Section] {
    SECTIONS
}

pub fn section_by_id(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|section| section.id == id)
}

/// The section expanded on first launch when the config does not say
/// otherwise.
pub const DEFAULT_EXPANDED_ID: &str = "overview";

static SECTIONS: &[Section] = &[
    Section {
        id: "overview",
        title: "DevOps Overview",
        summary: "DevOps is a cultural and professional movement that emphasizes communication, collaboration, and integration between software developers and IT operations professionals. The term blends \"Development\" and \"Operations\", representing the integration of software development processes with IT operations.",
        sub_sections: Some(&[
            SubSection {
                title: "Core Principles",
                description: "The pillars that make DevOps work",
                details: &[
                    "Automation: eliminate manual, repetitive tasks to reduce human error; Infrastructure as Code provisions environments and build automation cuts build times from hours to minutes",
                    "Measurement & Monitoring: quantifiable metrics give visibility into system performance and business outcomes; the DORA metrics are deployment frequency, lead time for changes, mean time to recovery, and change failure rate",
                    "Sharing: knowledge sharing breaks down silos between teams; shared ownership encourages collaboration and documentation keeps institutional knowledge beyond individual members",
                    "Incremental Improvement: iterate on processes continuously; blameless post-mortems turn incidents into learning and small frequent improvements compound into significant gains",
                ],
            },
            SubSection {
                title: "Goals & Benefits",
                description: "What organizations gain from adopting DevOps",
                details: &[
                    "Reduce time-to-market: deploy features multiple times per day instead of quarterly releases",
                    "Improve reliability: automated testing catches issues before production, reducing incidents",
                    "Enhance scalability: infrastructure-as-code enables rapid scaling based on demand",
                    "Cost optimization: automation reduces manual labor; cloud-native architecture optimizes resource usage",
                    "Better team dynamics: shared responsibility and transparency improve team satisfaction",
                ],
            },
        ]),
    },
    Section {
        id: "jenkins",
        title: "Jenkins - Continuous Integration & Deployment",
        summary: "Jenkins is an open-source automation server that enables developers and DevOps engineers to reliably build, test, and deploy their software. It provides hundreds of plugins to support building, deploying, and automating any project.",
        sub_sections: Some(&[
            SubSection {
                title: "Core Features",
                description: "Essential Jenkins capabilities for CI/CD",
                details: &[
                    "Distributed Builds: Jenkins can distribute work across multiple machines/agents to support faster builds, testing, and deployments across different platforms",
                    "Pipeline Support: declarative and scripted pipelines allow complex build workflows with stages, parallel execution, and conditional logic",
                    "Webhook Integration: trigger builds automatically from Git events (push, pull request) without manual intervention",
                    "Blue Ocean: modern UI for creating and visualizing continuous delivery pipelines",
                    "Plugin Ecosystem: over 1800 plugins for integrating with tools like Git, Docker, Kubernetes, SonarQube, Artifactory, AWS, Azure, and more",
                    "Groovy Scripting: define build logic using the Groovy language for advanced automation",
                    "Shared Libraries: reusable pipeline code across multiple projects to maintain consistency",
                    "Build History: comprehensive tracking of all builds with logs, artifacts, and performance metrics",
                ],
            },
            SubSection {
                title: "Pipeline Architecture",
                description: "Understanding Jenkins pipeline structure",
                details: &[
                    "Source Control Integration: automatically check out code from Git repositories with branch support",
                    "Build Stage: compile and package applications using Maven, Gradle, npm, dotnet, or other build tools",
                    "Test Stage: run unit tests, integration tests, and generate code coverage reports automatically",
                    "Analysis Stage: execute static code analysis using SonarQube, ESLint, FindBugs for code quality",
                    "Security Scanning: container image scanning, dependency vulnerability checks, SAST, DAST analysis",
                    "Artifact Management: store build artifacts in Artifactory or Nexus for version control",
                    "Deployment Stage: deploy to staging and production environments with approval gates",
                    "Notification: send notifications to Slack, email, or other channels for build status",
                    "Post-Build: cleanup, archiving logs, generating reports, triggering downstream jobs",
                ],
            },
            SubSection {
                title: "Advanced Configuration",
                description: "Enterprise Jenkins setup and best practices",
                details: &[
                    "Jenkins Configuration as Code (JCasC): define Jenkins configuration in YAML files stored in Git",
                    "High Availability: master-agent architecture with load balancing across multiple instances",
                    "Security: RBAC with role-based access control, SSH authentication, OAuth integration",
                    "Audit Logging: track all administrative actions, authentication attempts, and configuration changes",
                    "Backup Strategy: regular backups of jobs, configurations, and artifacts to prevent data loss",
                    "Monitor Performance: track build queue, executor load, disk space, and performance metrics",
                    "Agent Management: scale agents dynamically in Kubernetes or cloud providers based on workload",
                    "Secret Management: store credentials securely using the Jenkins credentials store or HashiCorp Vault",
                ],
            },
            SubSection {
                title: "Common Use Cases",
                description: "Real-world Jenkins implementations",
                details: &[
                    "Multi-branch Pipeline: build and test all branches and pull requests automatically",
                    "Scheduled Builds: nightly builds, weekly security scans, monthly performance tests",
                    "Parameterized Builds: allow users to specify build parameters like environment, version",
                    "Approval Gates: require manual approval before deploying to production",
                    "Blue-Green Deployments: zero-downtime deployments by switching traffic between versions",
                    "Canary Releases: deploy to a subset of users first, monitor metrics, then roll out to all",
                    "Rollback Automation: automatically roll back failed deployments to the previous version",
                    "Release Management: automated versioning, tagging, and release notes generation",
                ],
            },
        ]),
    },
    Section {
        id: "cicd",
        title: "CI/CD Automation & Best Practices",
        summary: "CI/CD (Continuous Integration/Continuous Deployment) is a methodology that enables teams to release code changes more frequently and reliably through automation of the build, test, and deployment processes.",
        sub_sections: Some(&[
            SubSection {
                title: "Continuous Integration (CI)",
                description: "Automated building and testing on every commit",
                details: &[
                    "Frequent Commits: developers commit code multiple times daily to a shared repository",
                    "Automated Build: every commit triggers an automated build process within minutes",
                    "Automated Tests: unit tests and integration tests run automatically on every build",
                    "Code Quality Checks: SonarQube analysis, linting, code coverage verification",
                    "Artifact Generation: build artifacts stored in a repository for later deployment",
                    "Fast Feedback: developers receive build results within 10-15 minutes",
                    "Early Error Detection: issues caught immediately rather than during the release phase",
                    "Team Visibility: all team members see current build status and code quality metrics",
                ],
            },
            SubSection {
                title: "Continuous Deployment (CD)",
                description: "Automated deployment to production environments",
                details: &[
                    "Deployment Pipeline: multi-stage pipeline from code to production with gates",
                    "Infrastructure as Code: define infrastructure using Terraform, CloudFormation, or Bicep",
                    "Configuration Management: manage environment-specific configurations securely",
                    "Blue-Green Deployments: two identical production environments for zero-downtime deployments",
                    "Canary Releases: gradually roll out to a percentage of users while monitoring metrics",
                    "Feature Flags: enable/disable features without redeploying using feature toggle systems",
                    "Automatic Rollback: detect failures and automatically roll back to the previous version",
                    "Health Checks: automated health checks after deployment to verify application status",
                ],
            },
            SubSection {
                title: "Benefits of CI/CD",
                description: "Advantages for development teams and organizations",
                details: &[
                    "Faster Time to Market: release features and fixes to production multiple times per day",
                    "Reduced Risk: smaller changes are lower risk and easier to debug if issues occur",
                    "Improved Quality: automated testing catches bugs before reaching production",
                    "Team Efficiency: developers spend less time on manual testing and deployment",
                    "Better Collaboration: forces clear communication and standardized processes",
                    "Cost Reduction: automation reduces manual effort and infrastructure costs",
                    "Competitive Advantage: respond quickly to market changes and customer feedback",
                    "Compliance: audit trails and automated governance for regulatory requirements",
                ],
            },
            SubSection {
                title: "Implementation Strategy",
                description: "Steps to implement CI/CD in your organization",
                details: &[
                    "Version Control: use Git with feature branches and pull requests for code review",
                    "Automated Testing: write unit tests, integration tests, and end-to-end tests",
                    "Build Automation: set up Jenkins, GitLab CI, GitHub Actions, or CircleCI",
                    "Environment Parity: ensure dev, staging, and production environments match",
                    "Monitoring & Logging: implement centralized logging and monitoring across all stages",
                    "Documentation: document pipelines, processes, and runbooks for team knowledge",
                    "Gradual Rollout: start with CI for existing projects, expand to CD incrementally",
                    "Team Training: train team members on new tools and processes thoroughly",
                ],
            },
        ]),
    },
    Section {
        id: "microservices",
        title: "Microservices Architecture",
        summary: "Microservices architecture breaks down applications into small, independent services that communicate through well-defined APIs. Each service handles specific business capabilities and can be developed, deployed, and scaled independently.",
        sub_sections: Some(&[
            SubSection {
                title: "Core Principles",
                description: "Fundamental concepts of microservices",
                details: &[
                    "Single Responsibility: each service focuses on one business capability or domain",
                    "Loose Coupling: services interact through APIs, not direct database access",
                    "High Cohesion: related functionality grouped within a single service",
                    "Independent Deployment: services can be deployed separately without affecting others",
                    "Technology Diversity: different services can use different languages and frameworks",
                    "Distributed Data: each service manages its own data and database",
                    "Fault Isolation: failures in one service don't cascade to others",
                    "Scalability: services can be scaled independently based on demand",
                ],
            },
            SubSection {
                title: "Service Communication",
                description: "How microservices communicate with each other",
                details: &[
                    "REST APIs: HTTP-based synchronous communication using RESTful endpoints",
                    "gRPC: high-performance RPC framework using HTTP/2 and Protocol Buffers",
                    "Message Queues: asynchronous communication using RabbitMQ, Kafka, or Azure Service Bus",
                    "Event Streaming: Kafka topics for event-driven architecture and event sourcing",
                    "API Gateway: single entry point that routes requests to appropriate services",
                    "Service Mesh: infrastructure layer managing inter-service communication (Istio, Linkerd)",
                    "Webhooks: services trigger callbacks to notify other services of events",
                    "GraphQL: query language for flexible API access across multiple services",
                ],
            },
            SubSection {
                title: "Challenges & Solutions",
                description: "Common microservices challenges and how to address them",
                details: &[
                    "Distributed Transactions: use the Saga pattern for transactions across services",
                    "Data Consistency: implement eventual consistency with event sourcing and CQRS",
                    "Service Discovery: use Kubernetes, Consul, or Eureka for dynamic service discovery",
                    "Network Latency: optimize API calls, use caching, batch operations strategically",
                    "Debugging Complexity: implement distributed tracing with Jaeger or Datadog APM",
                    "Operational Overhead: use container orchestration and infrastructure automation",
                    "Testing Challenges: implement contract testing, integration tests, and test pyramids",
                    "Monitoring Difficulty: centralized logging, metrics, and alerting for all services",
                ],
            },
            SubSection {
                title: "Design Patterns",
                description: "Common patterns in microservices architecture",
                details: &[
                    "API Gateway Pattern: single entry point for all client requests with routing and authentication",
                    "Service Mesh Pattern: dedicated infrastructure for service-to-service communication",
                    "Circuit Breaker: prevent cascading failures by stopping calls to failing services",
                    "Retry Pattern: automatically retry failed requests with exponential backoff",
                    "Timeout Pattern: set a maximum time to wait for responses to prevent hanging",
                    "Bulkhead Pattern: isolate resources to prevent one service from consuming all resources",
                    "Saga Pattern: coordinate transactions across multiple services",
                    "CQRS Pattern: separate read and write models for better performance and scalability",
                ],
            },
        ]),
    },
    Section {
        id: "docker",
        title: "Docker Containerization",
        summary: "Docker is a containerization platform that packages applications and their dependencies into lightweight, portable containers. This ensures consistency across development, testing, and production environments.",
        sub_sections: Some(&[
            SubSection {
                title: "Container Concepts",
                description: "Fundamental Docker and container concepts",
                details: &[
                    "Container: lightweight, standalone, executable package containing application and dependencies",
                    "Image: blueprint for creating containers, built from Dockerfile instructions",
                    "Dockerfile: text file with instructions to build Docker images layer by layer",
                    "Registry: repository for storing and sharing Docker images (Docker Hub, ECR, ACR, GCR)",
                    "Layer Caching: Docker builds images in layers, caching unchanged layers for faster builds",
                    "Container Orchestration: Kubernetes, Docker Swarm, or AWS ECS manages multiple containers",
                    "Networking: containers communicate via networks (bridge, overlay, host networking)",
                    "Storage: volumes persist data beyond the container lifecycle, bind mounts for local files",
                ],
            },
            SubSection {
                title: "Dockerfile Best Practices",
                description: "Optimal Dockerfile structure and practices",
                details: &[
                    "Use Specific Base Images: pin image versions instead of using the latest tag",
                    "Multi-stage Builds: reduce final image size by using separate build and runtime stages",
                    "Order Instructions: place frequently changing instructions at the end for better caching",
                    "Minimize Layers: combine RUN commands with && to reduce image layers",
                    "Remove Unnecessary Files: clean up package manager caches and temporary files",
                    "Security: run as a non-root user, don't include credentials in images",
                    "Health Checks: define HEALTHCHECK to monitor container health",
                    "Documentation: include labels for metadata and comments explaining instructions",
                ],
            },
            SubSection {
                title: "Docker Compose",
                description: "Multi-container application orchestration",
                details: &[
                    "YAML Configuration: define multi-container applications in docker-compose.yml",
                    "Service Definition: specify image, ports, volumes, environment variables for each service",
                    "Networking: automatic network creation for service-to-service communication",
                    "Volume Management: define and manage named volumes and bind mounts",
                    "Environment Variables: set environment-specific configuration in compose files",
                    "Dependencies: control startup order and health checks with depends_on",
                    "Override Files: use multiple compose files for dev, test, and production configurations",
                    "Container Linking: legacy linking mechanism for service discovery (use networks instead)",
                ],
            },
            SubSection {
                title: "Image Optimization",
                description: "Techniques to minimize Docker image size",
                details: &[
                    "Alpine Base Images: use lightweight Alpine Linux instead of full OS images",
                    "BuildKit: modern Docker build system with better performance and features",
                    "Distroless Images: minimal images with only app dependencies, no OS utilities",
                    "Squashing Layers: combine multiple layers into a single layer to reduce image size",
                    "Remove Build Artifacts: clean up compilation artifacts and source code in the final image",
                    "Use .dockerignore: exclude unnecessary files from the build context like node_modules",
                    "Dependency Scanning: scan images for vulnerabilities with Trivy or Snyk",
                    "Image Signing: sign and verify images for security and authenticity",
                ],
            },
        ]),
    },
    Section {
        id: "kubernetes",
        title: "Kubernetes Container Orchestration",
        summary: "Kubernetes is an open-source container orchestration platform that automates deployment, scaling, and management of containerized applications across clusters of machines.",
        sub_sections: Some(&[
            SubSection {
                title: "Core Concepts",
                description: "Essential Kubernetes objects and concepts",
                details: &[
                    "Cluster: group of worker nodes managed by a control plane to run containerized applications",
                    "Node: physical or virtual machine that runs containers, managed by kubelet",
                    "Pod: smallest deployable unit in Kubernetes, usually one container but can have multiple",
                    "Service: abstract way to expose applications running in pods with a stable network identity",
                    "Deployment: manages ReplicaSets and provides declarative updates for stateless applications",
                    "StatefulSet: manages stateful applications with stable network identity and persistent storage",
                    "ConfigMap: store non-sensitive configuration data separated from application code",
                    "Secret: store sensitive data like passwords and API keys securely with encryption",
                ],
            },
            SubSection {
                title: "Deployment & Scaling",
                description: "Deploying and scaling applications in Kubernetes",
                details: &[
                    "Declarative Configuration: define desired state in YAML manifests, Kubernetes converges to it",
                    "Rolling Updates: gradually replace old pods with new versions without downtime",
                    "Blue-Green Deployments: maintain two identical environments for instant switching",
                    "Canary Deployments: route a percentage of traffic to the new version while monitoring metrics",
                    "Horizontal Pod Autoscaling (HPA): automatically scale pods based on CPU/memory metrics",
                    "Vertical Pod Autoscaling (VPA): right-size pod requests and limits based on actual usage",
                    "Cluster Autoscaling: add/remove nodes based on resource demands",
                    "Resource Quotas: limit resource consumption at namespace level for multi-tenancy",
                ],
            },
            SubSection {
                title: "Networking & Security",
                description: "Network configuration and security in Kubernetes",
                details: &[
                    "Service Types: ClusterIP (internal), NodePort (external on node), LoadBalancer, ExternalName",
                    "Ingress: HTTP/HTTPS routing rules directing external traffic to services",
                    "Network Policies: restrict pod-to-pod communication at the network level",
                    "Service Mesh: Istio/Linkerd provide advanced traffic management and security",
                    "RBAC: role-based access control for users and service accounts",
                    "Pod Security Policies: enforce security standards at cluster level for pod creation",
                    "Network Segmentation: separate networks for different teams or applications",
                    "TLS Encryption: encrypt communication between services and to external clients",
                ],
            },
            SubSection {
                title: "Observability & Management",
                description: "Monitoring, logging, and troubleshooting in Kubernetes",
                details: &[
                    "Prometheus: collect and store time-series metrics from applications and infrastructure",
                    "Grafana: visualize metrics with dashboards and create alerts based on thresholds",
                    "ELK Stack: Elasticsearch for storage, Logstash for processing, Kibana for visualization",
                    "Distributed Tracing: Jaeger or Zipkin trace requests across services",
                    "kubectl: command-line interface for managing Kubernetes clusters",
                    "Logs: collect logs from all pods centrally using Fluentd or Filebeat",
                    "Events: Kubernetes events for pod scheduling, failures, updates",
                    "Resource Monitoring: monitor CPU, memory, disk usage at pod and node level",
                ],
            },
        ]),
    },
];
