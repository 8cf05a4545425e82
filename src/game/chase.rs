//! Ghost steering
//!
//! Ghosts drift through walls toward the player, one axis at a time: along x
//! while the horizontal gap is the larger one, otherwise along y.

use super::components::{Direction, Ghost, Player, Velocity};

/// Point the ghost at the player. Ties go to the vertical axis.
pub fn steer(ghost: &mut Ghost, player: &Player) {
    let dx = player.x - ghost.x;
    let dy = player.y - ghost.y;
    let speed = ghost.base_speed;

    let (velocity, direction) = if dx.abs() > dy.abs() {
        if dx >= 0.0 {
            (Velocity::new(speed, 0.0), Direction::Right)
        } else {
            (Velocity::new(-speed, 0.0), Direction::Left)
        }
    } else if dy >= 0.0 {
        (Velocity::new(0.0, speed), Direction::Up)
    } else {
        (Velocity::new(0.0, -speed), Direction::Down)
    };

    ghost.velocity = velocity;
    ghost.direction = direction;
}

/// Steer and move every ghost for one frame
pub fn chase_all(ghosts: &mut [Ghost], player: &Player, dt: f32) {
    for ghost in ghosts {
        steer(ghost, player);
        ghost.integrate(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(x, y, 20.0, 20.0, 100, 400)
    }

    fn ghost_at(x: f32, y: f32) -> Ghost {
        Ghost::new(x, y, 10.0, 10.0, 70.0, 10)
    }

    #[test]
    fn test_dominant_axis() {
        let player = player_at(100.0, 100.0);

        let mut g = ghost_at(0.0, 90.0);
        steer(&mut g, &player);
        assert_eq!(g.direction, Direction::Right);
        assert_eq!(g.velocity, Velocity::new(70.0, 0.0));

        let mut g = ghost_at(300.0, 120.0);
        steer(&mut g, &player);
        assert_eq!(g.direction, Direction::Left);
        assert_eq!(g.velocity, Velocity::new(-70.0, 0.0));

        let mut g = ghost_at(95.0, 0.0);
        steer(&mut g, &player);
        assert_eq!(g.direction, Direction::Up);
        assert_eq!(g.velocity, Velocity::new(0.0, 70.0));

        let mut g = ghost_at(110.0, 400.0);
        steer(&mut g, &player);
        assert_eq!(g.direction, Direction::Down);
        assert_eq!(g.velocity, Velocity::new(0.0, -70.0));
    }

    #[test]
    fn test_tie_moves_vertically() {
        let player = player_at(100.0, 100.0);
        let mut g = ghost_at(50.0, 50.0);
        steer(&mut g, &player);
        assert_eq!(g.direction, Direction::Up);
    }

    #[test]
    fn test_chase_closes_distance() {
        let player = player_at(500.0, 100.0);
        let mut ghosts = vec![ghost_at(0.0, 100.0), ghost_at(1000.0, 100.0)];
        let before: Vec<f32> = ghosts.iter().map(|g| (g.x - player.x).abs()).collect();
        chase_all(&mut ghosts, &player, 0.5);
        for (g, d) in ghosts.iter().zip(before) {
            assert!((g.x - player.x).abs() < d);
        }
    }
}
