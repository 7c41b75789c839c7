//! The built-in catalog of distributed-systems concepts.
//!
//! Pure content; the engine never depends on what is in here beyond the
//! invariants it asserts (unique ids). Related lists may reference ids that
//! do not exist — those simply produce no edge.

use universe_core::catalog::Concept;

/// All categories that appear in the catalog, in filter-button order.
pub const CATEGORIES: &[&str] = &[
    "consensus",
    "messaging",
    "coordination",
    "storage",
    "architecture",
    "patterns",
];

pub fn catalog() -> Vec<Concept> {
    vec![
        Concept::new(
            "raft",
            "Raft Consensus",
            "consensus",
            "👑",
            "A consensus algorithm designed as an alternative to Paxos. It's easier to \
             understand and implement while providing the same safety guarantees.",
            "Core principles: leader election (nodes elect a single leader), log \
             replication (the leader replicates logs to followers), and safety \
             (committed entries are never overwritten). Nodes are leaders, followers, \
             or candidates during elections. Used by etcd, Consul, and Kubernetes.",
            4,
            &["paxos", "consensus", "leader-election"],
        )
        .with_example("Used in etcd for maintaining cluster state in Kubernetes"),
        Concept::new(
            "paxos",
            "Paxos",
            "consensus",
            "⚖️",
            "The classic consensus protocol that ensures safety in asynchronous systems \
             with failure detectors.",
            "Paxos guarantees consensus among distributed processes even when some \
             processes fail.",
            5,
            &["raft", "consensus", "byzantine"],
        ),
        Concept::new(
            "kafka",
            "Apache Kafka",
            "messaging",
            "📨",
            "Distributed event streaming platform capable of handling trillions of \
             events a day.",
            "Kafka provides a high-throughput, low-latency platform for handling \
             real-time data feeds.",
            3,
            &["message-queue", "stream-processing", "pub-sub"],
        )
        .with_example("Used by LinkedIn for activity tracking and operational metrics"),
        Concept::new(
            "consul",
            "Consul",
            "coordination",
            "🔗",
            "Service networking solution to connect and secure services across any \
             runtime platform.",
            "Consul provides service discovery, configuration, and segmentation \
             functionality.",
            3,
            &["service-discovery", "configuration", "health-check"],
        )
        .with_example("Used by HashiCorp for service discovery in microservices"),
        Concept::new(
            "zookeeper",
            "ZooKeeper",
            "coordination",
            "🐘",
            "Centralized service for maintaining configuration information, naming, \
             and synchronization.",
            "ZooKeeper is used by distributed systems for coordination and consensus.",
            4,
            &["coordination", "configuration", "consensus"],
        ),
        Concept::new(
            "cassandra",
            "Apache Cassandra",
            "storage",
            "🗃️",
            "Highly scalable distributed NoSQL database designed to handle large \
             amounts of data across many commodity servers.",
            "Cassandra provides high availability with no single point of failure.",
            4,
            &["database", "replication", "partitioning"],
        )
        .with_example("Used by Netflix for storing user viewing data"),
        Concept::new(
            "grpc",
            "gRPC",
            "messaging",
            "🚀",
            "High-performance, open-source universal RPC framework developed by Google.",
            "gRPC uses HTTP/2 for transport and Protocol Buffers as its interface \
             description language.",
            3,
            &["rpc", "protocol-buffers", "http2"],
        )
        .with_example("Used by Google for internal service communication"),
        Concept::new(
            "kubernetes",
            "Kubernetes",
            "architecture",
            "☸️",
            "Portable, extensible, open-source platform for managing containerized \
             workloads and services.",
            "Kubernetes automates deployment, scaling, and management of containerized \
             applications.",
            5,
            &["orchestration", "containers", "microservices"],
        )
        .with_example("Used by Google, Amazon, and Microsoft for container orchestration"),
        Concept::new(
            "circuit-breaker",
            "Circuit Breaker",
            "patterns",
            "⚡",
            "Design pattern used to detect failures and encapsulate the logic of \
             preventing a failure from constantly recurring.",
            "Prevents cascading failures in distributed systems.",
            2,
            &["resilience", "failure-detection", "microservices"],
        ),
        Concept::new(
            "consistent-hashing",
            "Consistent Hashing",
            "patterns",
            "🎯",
            "Special kind of hashing that minimizes reorganization when nodes are \
             added or removed.",
            "Used in distributed hash tables and load balancers.",
            3,
            &["hashing", "load-balancing", "partitioning"],
        ),
        Concept::new(
            "vector-clocks",
            "Vector Clocks",
            "consensus",
            "🕰️",
            "Algorithm for generating a partial ordering of events in a distributed \
             system.",
            "Used for tracking causality between events in distributed systems.",
            4,
            &["clocks", "causality", "event-ordering"],
        ),
        Concept::new(
            "byzantine",
            "Byzantine Fault",
            "consensus",
            "👑",
            "The Byzantine Generals Problem describes the difficulty decentralized \
             systems have in agreeing on a strategy.",
            "A node may fail in arbitrary ways, including sending contradictory \
             messages.",
            5,
            &["fault-tolerance", "consensus", "paxos"],
        ),
    ]
}

/// Fallback example line for concepts without a specific one.
pub const GENERIC_EXAMPLE: &str = "Widely used in production distributed systems";
