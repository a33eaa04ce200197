// tests/canonical_session.rs
use robot_world_core::grid::Grid;
use robot_world_core::mission::{Mission, RunResult, load_session_from_string};
use robot_world_core::{Direction, Position};

#[test]
fn canonical_three_robot_session() {
    let mut mission = Mission::new(Grid::new(5, 3).unwrap());

    // Robot 1: a closed clockwise loop, back where it started.
    let first = mission
        .run_robot(Position::new(1, 1), Direction::East, "RFRFRFRF")
        .unwrap();
    assert_eq!(
        first,
        RunResult {
            position: Position::new(1, 1),
            facing: Direction::East,
            lost: false,
        }
    );

    // Robot 2: walks off the top edge at (3, 3) and leaves a scent there.
    let second = mission
        .run_robot(Position::new(3, 2), Direction::North, "FRRFLLFFRRFLL")
        .unwrap();
    assert_eq!(
        second,
        RunResult {
            position: Position::new(3, 3),
            facing: Direction::North,
            lost: true,
        }
    );
    assert!(mission
        .grid()
        .has_scent(Position::new(3, 3), Direction::North));

    // Robot 3: crosses the same edge cell; the scent suppresses its loss.
    let third = mission
        .run_robot(Position::new(0, 3), Direction::West, "LLFFFLFLFL")
        .unwrap();
    assert_eq!(
        third,
        RunResult {
            position: Position::new(2, 3),
            facing: Direction::South,
            lost: false,
        }
    );

    assert_eq!(mission.grid().scent_count(), 1);
}

#[test]
fn canonical_session_through_the_script_loader() {
    let script = "5 3\n\
                  1 1 E\n\
                  RFRFRFRF\n\
                  3 2 N\n\
                  FRRFLLFFRRFLL\n\
                  0 3 W\n\
                  LLFFFLFLFL\n";

    let (mut mission, plans) = load_session_from_string(script).unwrap();
    let results: Vec<RunResult> = plans
        .iter()
        .map(|plan| mission.run_plan(plan).unwrap())
        .collect();

    let rendered: Vec<String> = results
        .iter()
        .map(|result| {
            format!(
                "{} {} {}{}",
                result.position.x,
                result.position.y,
                result.facing.as_char(),
                if result.lost { " LOST" } else { "" }
            )
        })
        .collect();

    assert_eq!(rendered, vec!["1 1 E", "3 3 N LOST", "2 3 S"]);
}
