use lazor::{Block, CellBoard, Location, Outcome, PuzzleBuilder, RandomPlacement, SolverConfig};

fn main() {
    // mad 1: a 4x4 open board, two mirrors and one refractive block
    let board = CellBoard::from_rows(["o o o o", "o o o o", "o o o o", "o o o o"]).unwrap();
    let puzzle = PuzzleBuilder::with_board(board)
        .add_laser(Location(2, 7), (1, -1))
        .add_target(Location(3, 0))
        .add_target(Location(4, 3))
        .add_target(Location(2, 5))
        .add_target(Location(4, 7))
        .add_blocks(Block::Reflect, 2)
        .add_blocks(Block::Refract, 1)
        .build()
        .unwrap();

    match puzzle.solve(&RandomPlacement, SolverConfig::default()).unwrap() {
        Outcome::Solved(solution) => {
            println!("solved on trial {}", solution.trial);
            print!("{}", solution.board);
        }
        Outcome::NoSolutionFound { trials } => println!("no solution found within {} trials", trials),
    }
}
