use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_catalog::layout::maze::Maze;
use scene_catalog::layout::staircase::StairLoop;
use scene_catalog::layout::{grid, line, ring, scatter};

#[cfg(test)]
mod maze_tests {
    use super::*;

    #[test]
    fn test_maze_is_a_spanning_tree() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let maze = Maze::generate(9, 7, &mut rng);
            assert_eq!(maze.passages(), 9 * 7 - 1, "seed {seed}");
            assert_eq!(maze.reachable(), 9 * 7, "seed {seed}");
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = Maze::generate(12, 12, &mut StdRng::seed_from_u64(77));
        let b = Maze::generate(12, 12, &mut StdRng::seed_from_u64(77));
        assert_eq!(a.walls(), b.walls());
        assert_eq!(a.solve(), b.solve());
    }

    #[test]
    fn test_solution_walks_open_passages() {
        let maze = Maze::generate(10, 10, &mut StdRng::seed_from_u64(5));
        let path = maze.solve();
        assert_eq!(path.first(), Some(&maze.entrance()));
        assert_eq!(path.last(), Some(&maze.exit()));
        for pair in path.windows(2) {
            assert!(maze.is_open(pair[0], pair[1]), "{:?} -> {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_large_maze_does_not_overflow() {
        let maze = Maze::generate(200, 200, &mut StdRng::seed_from_u64(1));
        assert_eq!(maze.reachable(), 200 * 200);
    }
}

#[cfg(test)]
mod staircase_tests {
    use super::*;

    #[test]
    fn test_step_count_and_sides() {
        let stairs = StairLoop::new(Vec3::ZERO, 5.0, 10, 0.3);
        assert_eq!(stairs.len(), 40);
        assert_eq!(stairs.steps.last().map(|s| s.side), Some(3));
    }

    #[test]
    fn test_heights_strictly_increase_by_rise() {
        let stairs = StairLoop::new(Vec3::new(0.0, 2.0, 0.0), 4.0, 4, 0.5);
        assert_eq!(stairs.steps[0].position.y, 2.0);
        for pair in stairs.steps.windows(2) {
            assert!((pair[1].position.y - pair[0].position.y - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn test_perimeter_closes() {
        let stairs = StairLoop::new(Vec3::ZERO, 6.0, 12, 0.2);
        assert!(stairs.closure_gap() < stairs.tread);
        assert!((stairs.closure_drop() - 0.2 * 47.0).abs() < 1e-3);
    }
}

#[cfg(test)]
mod point_layout_tests {
    use super::*;

    #[test]
    fn test_ring_points_sit_on_the_radius() {
        let points: Vec<_> = ring(Vec3::new(1.0, 2.0, 3.0), 4.0, 16).collect();
        assert_eq!(points.len(), 16);
        for (p, _) in points {
            assert!(((p - Vec3::new(1.0, 2.0, 3.0)).length() - 4.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_grid_is_centered() {
        let sum: Vec3 = grid(Vec3::ZERO, 2.0, 5, 3).map(|(_, _, p)| p).sum();
        assert!(sum.length() < 1e-4);
    }

    #[test]
    fn test_line_includes_both_ends() {
        let points: Vec<_> = line(Vec3::ZERO, Vec3::X * 10.0, 6).collect();
        assert_eq!(points.first(), Some(&Vec3::ZERO));
        assert!((points[5] - Vec3::X * 10.0).length() < 1e-5);
    }

    #[test]
    fn test_scatter_stays_in_box() {
        let mut rng = StdRng::seed_from_u64(8);
        for p in scatter(&mut rng, 500, Vec3::Y, Vec3::new(2.0, 1.0, 3.0)) {
            assert!(p.x.abs() <= 2.0 && (p.y - 1.0).abs() <= 1.0 && p.z.abs() <= 3.0);
        }
    }
}
