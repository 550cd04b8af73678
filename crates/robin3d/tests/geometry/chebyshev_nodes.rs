use robin3d::utils::chebyshev_nodes;

#[test]
fn fuselage_domain_nodes_are_increasing_with_exact_endpoints() {
    let nodes = chebyshev_nodes(0.0, 2.0, 12);

    assert_eq!(nodes.len(), 13);
    assert_eq!(nodes[0], 0.0);
    assert_eq!(nodes[12], 2.0);
    assert!(nodes.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn pylon_domain_nodes_are_increasing_with_exact_endpoints() {
    let nodes = chebyshev_nodes(0.4, 1.018, 4);

    assert_eq!(nodes.len(), 5);
    assert_eq!(nodes[0], 0.4);
    assert_eq!(nodes[4], 1.018);
    assert!(nodes.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn single_element_yields_the_two_endpoints() {
    let nodes = chebyshev_nodes(0.0, 2.0, 1);
    assert_eq!(nodes, vec![0.0, 2.0]);
}
