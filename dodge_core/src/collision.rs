//! Axis-aligned bounding-box overlap between the player and the enemies.

use crate::entity::{Enemy, Player, Rect};

/// Strict overlap of two half-open boxes.  Boxes that merely share an edge do
/// not overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Index of the first enemy overlapping the player, if any.
pub fn first_collision(player: &Player, enemies: &[Enemy]) -> Option<usize> {
    let pb = player.bounds();
    enemies.iter().position(|e| overlaps(&pb, &e.bounds()))
}

/// True if any enemy overlaps the player.
pub fn collides(player: &Player, enemies: &[Enemy]) -> bool {
    first_collision(player, enemies).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: i32, y: i32) -> Player {
        Player { x, y, width: 50, height: 50 }
    }

    #[test]
    fn identical_boxes_collide() {
        let r = Rect::new(10, 20, 30, 30);
        assert!(overlaps(&r, &r));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let a = Rect::new(0, 0, 50, 50);
        assert!(!overlaps(&a, &Rect::new(50, 0, 50, 50)));
        assert!(!overlaps(&a, &Rect::new(0, 50, 50, 50)));
        assert!(!overlaps(&a, &Rect::new(-50, 0, 50, 50)));
        assert!(!overlaps(&a, &Rect::new(0, -50, 50, 50)));
    }

    #[test]
    fn gap_on_one_axis_prevents_collision() {
        let a = Rect::new(0, 0, 50, 50);
        // overlapping in x, gap in y
        assert!(!overlaps(&a, &Rect::new(10, 60, 20, 20)));
        // overlapping in y, gap in x
        assert!(!overlaps(&a, &Rect::new(70, 10, 20, 20)));
    }

    #[test]
    fn containment_collides_both_ways() {
        let big   = Rect::new(0, 0, 100, 100);
        let small = Rect::new(40, 40, 10, 10);
        assert!(overlaps(&big, &small));
        assert!(overlaps(&small, &big));
    }

    #[test]
    fn empty_enemy_list_never_collides() {
        assert!(!collides(&player_at(615, 580), &[]));
    }

    #[test]
    fn corner_overlap_is_detected() {
        let p = player_at(615, 580);
        let e = Enemy { x: 600, y: 570, size: 40, speed: 10 };
        assert!(collides(&p, &[e]));
    }

    #[test]
    fn first_collision_reports_earliest_index() {
        let p = player_at(615, 580);
        let miss = Enemy { x: 0, y: 0, size: 30, speed: 10 };
        let hit  = Enemy { x: 620, y: 590, size: 30, speed: 10 };
        assert_eq!(first_collision(&p, &[miss, hit, hit]), Some(1));
    }
}
