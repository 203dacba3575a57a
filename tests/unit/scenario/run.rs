use super::*;
use crate::scenario::model::{
    BlockSpiralScenario, CirclesScenario, CurvedTriangleScenario, InscriptionScenario,
    PendulumScenario, ThreeCirclesScenario, YinYangScenario,
};

#[test]
fn pendulum_frames_follow_the_trajectory() {
    let scenario = Scenario::Pendulum(PendulumScenario {
        steps: 100,
        duration: Some(1.0),
        fps: Some(Fps::new(10, 1).unwrap()),
        ..PendulumScenario::default()
    });
    let ScenarioOutput::Pendulum(out) = scenario.run().unwrap() else {
        panic!("expected pendulum output");
    };
    assert_eq!(out.run.trajectory.len(), 100);
    assert_eq!(out.frames.len(), 11);
    assert_eq!(out.frames[0].row, 0);
    assert_eq!(out.frames[0].state, out.run.trajectory.state(0).unwrap());
    assert_eq!(out.frames[10].row, 99);
    assert_eq!(out.frames[10].frame, FrameIndex(10));
}

#[test]
fn pendulum_defaults_to_one_period_without_frames() {
    let ScenarioOutput::Pendulum(out) = Scenario::Pendulum(PendulumScenario::default())
        .run()
        .unwrap()
    else {
        panic!("expected pendulum output");
    };
    let period = out.run.params.small_angle_period();
    let times = out.run.trajectory.times();
    assert!((times[times.len() - 1] - period).abs() < 1e-12);
    assert!(out.frames.is_empty());

    let json = serde_json::to_value(ScenarioOutput::Pendulum(out)).unwrap();
    assert_eq!(json["kind"], "pendulum");
    assert!(json.get("frames").is_none());
    assert_eq!(json["thetas"].as_array().unwrap().len(), 1000);
}

#[test]
fn life_reports_population_history() {
    let scenario = Scenario::GameOfLife(LifeScenario {
        rule: Rule::CLASSIC,
        rows: 8,
        cols: 8,
        seeding: Seeding::Manual,
        generations: 3,
        record_changes: true,
        ..LifeScenario::default()
    });
    let ScenarioOutput::GameOfLife(out) = scenario.run().unwrap() else {
        panic!("expected game_of_life output");
    };
    assert_eq!(out.population, vec![3, 2, 0, 0]);
    assert_eq!(out.changes.len(), 3);
    assert!(out.changes[2].is_empty());
    assert_eq!(out.initial[2], "..#.#...");
    assert!(out.final_grid.iter().all(|r| r == "........"));
}

#[test]
fn life_pattern_is_placed_top_left() {
    let scenario = Scenario::GameOfLife(LifeScenario {
        rule: Rule::CLASSIC,
        rows: 5,
        cols: 5,
        seeding: Seeding::Pattern {
            rows: vec!["##".into(), "##".into()],
        },
        generations: 4,
        ..LifeScenario::default()
    });
    let ScenarioOutput::GameOfLife(out) = scenario.run().unwrap() else {
        panic!("expected game_of_life output");
    };
    assert_eq!(out.population, vec![4; 5]);
    assert_eq!(out.final_grid[0], "##...");
    assert!(out.changes.is_empty());
}

#[test]
fn geometry_scenarios_run_with_defaults() {
    let ScenarioOutput::Inscription(ins) =
        Scenario::Inscription(InscriptionScenario::default()).run().unwrap()
    else {
        panic!("expected inscription output");
    };
    assert_eq!(ins.polygons.len(), 16);
    assert!(ins.svg.iter().all(|p| p.starts_with('M')));

    let ScenarioOutput::CirclesIntersection(c) =
        Scenario::CirclesIntersection(CirclesScenario::default()).run().unwrap()
    else {
        panic!("expected circles output");
    };
    assert_eq!(c.points.len(), 2);
    for p in &c.points {
        assert!(p.x.abs() < 1e-12);
        assert!((p.y.abs() - 2.16f64.sqrt()).abs() < 1e-12);
    }

    let ScenarioOutput::BlockSpiral(sp) =
        Scenario::BlockSpiral(BlockSpiralScenario::default()).run().unwrap()
    else {
        panic!("expected block spiral output");
    };
    assert_eq!(sp.sequence.len(), 64);

    let ScenarioOutput::CurvedTriangle(ct) =
        Scenario::CurvedTriangle(CurvedTriangleScenario::default()).run().unwrap()
    else {
        panic!("expected curved triangle output");
    };
    assert_eq!(ct.frames.len(), 60);
    assert_eq!(ct.frames[0].helper_opacity, 1.0);
    assert_eq!(ct.frames[59].helper_opacity, 0.0);

    let out = Scenario::YinYang(YinYangScenario::default()).run().unwrap();
    assert_eq!(out.kind(), "yin_yang");
    let ScenarioOutput::YinYang(yy) = out else {
        panic!("expected yin_yang output");
    };
    assert_eq!(yy.glyph.radius, 4.0);
    assert!(yy.svg.starts_with('M'));
    assert_eq!(yy.eyes[0].center, Point::new(0.0, 2.0));
    assert_eq!(yy.eyes[1].radius, 0.5);
    assert_eq!(yy.left_half.len(), yy.left_half_circle.len() + yy.middle_s.len());
    assert_eq!(yy.right_half[0], yy.middle_s[0]);

    let out = Scenario::ThreeCircles(ThreeCirclesScenario::default()).run().unwrap();
    assert_eq!(out.kind(), "three_circles");
    let ScenarioOutput::ThreeCircles(tc) = out else {
        panic!("expected three_circles output");
    };
    assert_eq!(tc.satellites.len(), 12);
    assert!((tc.outer_radius - 3.0 * (1.0 + 1.0 / 3f64.sqrt())).abs() < 1e-12);
}

#[test]
fn life_birth_mode_reaches_the_automaton() {
    let scenario = |birth_mode| {
        Scenario::GameOfLife(LifeScenario {
            rule: Rule::HIGH_LIFE,
            rows: 3,
            cols: 3,
            birth_mode,
            seeding: Seeding::Pattern {
                rows: vec!["###".into(), ".#.".into(), "###".into()],
            },
            generations: 1,
            ..LifeScenario::default()
        })
    };
    let ScenarioOutput::GameOfLife(standard) = scenario(BirthMode::DeadOnly).run().unwrap() else {
        panic!("expected game_of_life output");
    };
    let ScenarioOutput::GameOfLife(any) = scenario(BirthMode::AnyCell).run().unwrap() else {
        panic!("expected game_of_life output");
    };
    assert_eq!(standard.final_grid[1].as_bytes()[1], b'.');
    assert_eq!(any.final_grid[1].as_bytes()[1], b'#');
    assert_eq!(any.birth_mode, BirthMode::AnyCell);
}

#[test]
fn run_validates_first() {
    let s = Scenario::BlockSpiral(BlockSpiralScenario { n: 3 });
    assert!(matches!(
        s.run(),
        Err(crate::foundation::error::GeomotionError::Validation(_))
    ));
}
