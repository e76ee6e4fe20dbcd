//! Layout guarantees of the shelf packer, checked over generated inputs.

use shelfpack::packing::{Rect, ShelfPacker, canvas_bounds};

/// Deterministic sprite sizes in `1..=max`
fn generated_sizes(count: usize, max: u32, seed: u64) -> Vec<(u32, u32)> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        u32::try_from(state >> 33).unwrap() % max + 1
    };
    (0..count).map(|_| (next(), next())).collect()
}

fn cases() -> Vec<(Vec<(u32, u32)>, u32)> {
    vec![
        (generated_sizes(50, 64, 1), 2),
        (generated_sizes(200, 128, 7), 0),
        (generated_sizes(120, 300, 42), 5),
        (generated_sizes(10, 900, 3), 1),
        (vec![(1000, 50), (20, 20), (700, 10)], 2),
    ]
}

#[test]
fn placements_never_overlap() {
    for (sizes, padding) in cases() {
        let layout = ShelfPacker::new(padding).pack(&sizes).unwrap();
        let rects: Vec<Rect> = layout.placements.iter().map(|p| p.rect).collect();

        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(!a.intersects(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }
}

#[test]
fn placements_lie_inside_canvas() {
    for (sizes, padding) in cases() {
        let layout = ShelfPacker::new(padding).pack(&sizes).unwrap();
        let canvas = Rect::new(0, 0, layout.width, layout.height);

        for placement in &layout.placements {
            assert!(canvas.contains(&placement.rect), "{:?}", placement.rect);
        }
    }
}

#[test]
fn canvas_is_tight() {
    for (sizes, padding) in cases() {
        let layout = ShelfPacker::new(padding).pack(&sizes).unwrap();

        let max_right = layout.placements.iter().map(|p| p.rect.right()).max();
        let max_bottom = layout.placements.iter().map(|p| p.rect.bottom()).max();
        assert_eq!(Some(layout.width), max_right);
        assert_eq!(Some(layout.height), max_bottom);
        assert_eq!(
            canvas_bounds(layout.placements.iter().map(|p| &p.rect)).unwrap(),
            (layout.width, layout.height)
        );
    }
}

#[test]
fn every_sprite_is_placed_once_at_its_own_size() {
    for (sizes, padding) in cases() {
        let layout = ShelfPacker::new(padding).pack(&sizes).unwrap();
        assert_eq!(layout.placements.len(), sizes.len());

        let mut seen = vec![false; sizes.len()];
        for placement in &layout.placements {
            assert!(!seen[placement.index]);
            seen[placement.index] = true;
            let (w, h) = sizes[placement.index];
            assert_eq!((placement.rect.width, placement.rect.height), (w, h));
        }
    }
}

#[test]
fn placement_order_is_height_descending_and_stable() {
    for (sizes, padding) in cases() {
        let layout = ShelfPacker::new(padding).pack(&sizes).unwrap();

        for pair in layout.placements.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(a.rect.height >= b.rect.height);
            if a.rect.height == b.rect.height {
                assert!(a.index < b.index, "equal heights must keep input order");
            }
        }
    }
}

#[test]
fn packing_is_deterministic() {
    for (sizes, padding) in cases() {
        let first = ShelfPacker::new(padding).pack(&sizes).unwrap();
        let second = ShelfPacker::new(padding).pack(&sizes).unwrap();

        assert_eq!(first.placements, second.placements);
        assert_eq!((first.width, first.height), (second.width, second.height));
    }
}
