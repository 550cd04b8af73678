mod chebyshev_nodes;
mod cross_section_symmetry;
mod robin_trimesh;
