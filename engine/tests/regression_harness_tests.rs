use engine::{
    GameLogic, HeadlessRunner,
    graphics::Renderer2d,
    regression::{first_replay_divergence, render_hashes},
    render::draw_block,
    surface::SurfaceSize,
};

const BLOCK: u32 = 4;

#[derive(Debug, Clone)]
struct GridGame {
    cols: usize,
    rows: usize,
}

#[derive(Debug, Clone, Copy)]
struct SetCell {
    row: usize,
    col: usize,
}

impl GameLogic for GridGame {
    type State = Vec<Vec<bool>>;
    type Input = SetCell;

    fn initial_state(&self) -> Self::State {
        vec![vec![false; self.cols]; self.rows]
    }

    fn step(&self, state: &Self::State, input: Self::Input) -> Self::State {
        let mut next = state.clone();
        if let Some(cell) = next.get_mut(input.row).and_then(|r| r.get_mut(input.col)) {
            *cell = true;
        }
        next
    }
}

fn draw(state: &Vec<Vec<bool>>, gfx: &mut dyn Renderer2d) {
    gfx.clear();
    for (r, row) in state.iter().enumerate() {
        for (c, &filled) in row.iter().enumerate() {
            if filled {
                draw_block(gfx, r as i32, c as i32, BLOCK, [200, 10, 10, 255]);
            }
        }
    }
}

fn size() -> SurfaceSize {
    SurfaceSize::for_blocks(3, 3, BLOCK)
}

#[test]
fn deterministic_game_replays_identically() {
    let inputs = [
        SetCell { row: 0, col: 0 },
        SetCell { row: 2, col: 1 },
        SetCell { row: 9, col: 9 },
    ];
    let divergence = first_replay_divergence(
        || HeadlessRunner::new(GridGame { cols: 3, rows: 3 }),
        size(),
        &inputs,
        draw,
    );
    assert_eq!(divergence, None);
}

#[test]
fn hashes_change_only_when_pixels_change() {
    let mut runner = HeadlessRunner::new(GridGame { cols: 3, rows: 3 });
    let hashes = render_hashes(
        &mut runner,
        size(),
        [
            SetCell { row: 1, col: 1 },
            SetCell { row: 1, col: 1 },
            SetCell { row: 0, col: 2 },
        ],
        draw,
    );
    assert_eq!(hashes.len(), 3);
    assert_eq!(hashes[0], hashes[1]);
    assert_ne!(hashes[1], hashes[2]);
    assert_eq!(runner.frame(), 3);
}
