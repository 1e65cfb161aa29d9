//! Unit tests for nest-flow.
//!
//! All fixtures are hand-constructed so min-cut values can be asserted
//! exactly.

#[cfg(test)]
mod helpers {
    use nest_graph::{AnthillBuilder, FlowGraph, TunnelCapacity};

    /// Build a graph from room (name, capacity) pairs and tunnel pairs;
    /// `S_v` is the source, `S_d` the sink.
    pub fn anthill(
        rooms: &[(&str, u32)],
        tunnels: &[(&str, &str)],
        policy: TunnelCapacity,
    ) -> FlowGraph {
        let mut b = AnthillBuilder::new();
        b.tunnel_capacity(policy);
        for &(name, cap) in rooms {
            b.add_room(name, cap).unwrap();
        }
        for &(a, c) in tunnels {
            b.add_tunnel(a, c).unwrap();
        }
        b.source("S_v").unwrap();
        b.sink("S_d").unwrap();
        b.build().unwrap()
    }
}

#[cfg(test)]
mod max_flow {
    use super::helpers::anthill;
    use crate::max_flow;
    use nest_graph::TunnelCapacity;

    #[test]
    fn two_parallel_unit_rooms_give_flow_two() {
        let g = anthill(
            &[("S_v", 100), ("M1", 1), ("M2", 1), ("S_d", 100)],
            &[("S_v", "M1"), ("S_v", "M2"), ("M1", "S_d"), ("M2", "S_d")],
            TunnelCapacity::Unbounded,
        );
        assert_eq!(max_flow(&g).value, 2);
    }

    #[test]
    fn chain_bottleneck_is_smallest_room() {
        let g = anthill(
            &[("S_v", 100), ("A", 2), ("B", 1), ("S_d", 100)],
            &[("S_v", "A"), ("A", "B"), ("B", "S_d")],
            TunnelCapacity::Unbounded,
        );
        assert_eq!(max_flow(&g).value, 1);
    }

    #[test]
    fn direct_tunnel_saturates_at_unbounded_capacity() {
        // Min-cut consists of a single unbounded tunnel edge; no interior
        // room limits it.
        let g = anthill(
            &[("S_v", 100), ("S_d", 100)],
            &[("S_v", "S_d")],
            TunnelCapacity::Unbounded,
        );
        assert_eq!(max_flow(&g).value, nest_graph::UNBOUNDED_CAPACITY as u64);
    }

    #[test]
    fn disconnected_sink_gives_zero() {
        let g = anthill(&[("S_v", 100), ("S_d", 100)], &[], TunnelCapacity::Unbounded);
        let flow = max_flow(&g);
        assert_eq!(flow.value, 0);
        assert!(flow.edge_flow.iter().all(|&f| f == 0));
    }

    #[test]
    fn tunnel_capacity_one_caps_a_wide_room() {
        // Room capacity 5 but a single unit tunnel on each side: cut = 1.
        let g = anthill(
            &[("S_v", 100), ("W", 5), ("S_d", 100)],
            &[("S_v", "W"), ("W", "S_d")],
            TunnelCapacity::One,
        );
        assert_eq!(max_flow(&g).value, 1);
    }

    #[test]
    fn diamond_needs_rerouting() {
        // Two source tunnels feed X; X(1) forces one unit through Y instead.
        //
        //   S_v ── X(1) ── S_d
        //    │      │
        //    └── Y(1) ──────┘
        let g = anthill(
            &[("S_v", 100), ("X", 1), ("Y", 1), ("S_d", 100)],
            &[
                ("S_v", "X"),
                ("S_v", "Y"),
                ("X", "Y"),
                ("X", "S_d"),
                ("Y", "S_d"),
            ],
            TunnelCapacity::Unbounded,
        );
        assert_eq!(max_flow(&g).value, 2);
    }

    #[test]
    fn conservation_holds_at_interior_nodes() {
        let g = anthill(
            &[("S_v", 100), ("A", 2), ("B", 1), ("S_d", 100)],
            &[("S_v", "A"), ("A", "B"), ("B", "S_d"), ("S_v", "B")],
            TunnelCapacity::Unbounded,
        );
        let flow = max_flow(&g);
        for n in 0..g.node_count() as u32 {
            let node = nest_core::FlowNodeId(n);
            if node == g.source_node() || node == g.sink_node() {
                continue;
            }
            // Signed flow on residual twins makes net outflow sum to zero.
            let net: i64 = g.out_edges(node).map(|e| flow.edge_flow[e.index()]).sum();
            assert_eq!(net, 0, "conservation violated at node {node}");
        }
    }
}
