use fairway_score::course::{
    calculate_total_par, meters_to_yards, validate_course, validate_hole_indexes, yards_to_meters,
};
use fairway_score::model::{GolfCourse, HoleInfo, TeeBox, TeeColor};

fn eighteen_holes() -> Vec<HoleInfo> {
    (1..=18)
        .map(|n| HoleInfo {
            number: n,
            par: 4,
            index: n,
            range_yards: 380,
            range_meters: 347,
        })
        .collect()
}

fn course(holes: Vec<HoleInfo>, tee_boxes: Vec<TeeBox>) -> GolfCourse {
    GolfCourse {
        course_id: "c1".to_string(),
        name: "Pebble Creek".to_string(),
        holes,
        tee_boxes,
    }
}

fn white_tees() -> TeeBox {
    TeeBox {
        id: "t1".to_string(),
        color: TeeColor::White,
        men_slope: 113,
        women_slope: 120,
    }
}

#[test]
fn unique_indexes_produce_no_conflicts() {
    assert!(validate_hole_indexes(&eighteen_holes()).is_empty());
}

#[test]
fn duplicate_index_reports_both_holes() {
    let mut holes = eighteen_holes();
    // holes 3 and 7 both claim stroke index 5; index 3 stays in play on hole 5
    holes[2].index = 5;
    holes[4].index = 3;
    holes[6].index = 5;

    let conflicts = validate_hole_indexes(&holes);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].hole_number, 7);
    assert_eq!(conflicts[0].first_hole_number, 3);
    assert_eq!(conflicts[0].index, 5);
}

#[test]
fn triplicate_index_reports_every_later_occurrence() {
    let mut holes = eighteen_holes();
    holes[4].index = 1;
    holes[9].index = 1;

    let conflicts = validate_hole_indexes(&holes);
    assert_eq!(conflicts.len(), 2);
    assert!(conflicts.iter().all(|c| c.first_hole_number == 1));
}

#[test]
fn par_totals_front_back_and_total() {
    let mut holes = eighteen_holes();
    let totals = calculate_total_par(&holes);
    assert_eq!((totals.front, totals.back, totals.total), (36, 36, 72));

    holes[0].par = 5;
    let totals = calculate_total_par(&holes);
    assert_eq!((totals.front, totals.back, totals.total), (37, 36, 73));
}

#[test]
fn yards_meters_round_trip_exact_for_200() {
    assert_eq!(yards_to_meters(200), 183);
    assert_eq!(meters_to_yards(183), 200);
}

#[test]
fn yards_meters_round_trip_is_lossy_for_169() {
    // 169 yd -> 155 m, but 155 m converts back to 170 yd. The drift is the
    // documented behavior of one-directional rounded conversion.
    assert_eq!(yards_to_meters(169), 155);
    assert_eq!(meters_to_yards(155), 170);
}

#[test]
fn valid_course_has_no_errors() {
    let course = course(eighteen_holes(), vec![white_tees()]);
    assert!(validate_course(&course).is_empty());
}

#[test]
fn course_errors_are_field_keyed_messages() {
    let mut holes = eighteen_holes();
    holes[1].par = 6;
    holes[3].index = 40;
    let mut red = white_tees();
    red.id = "t2".to_string();
    red.color = TeeColor::Red;
    red.men_slope = 200;
    let mut red_again = red.clone();
    red_again.id = "t3".to_string();
    red_again.men_slope = 113;

    let course = course(holes, vec![white_tees(), red, red_again]);
    let errors = validate_course(&course);

    assert!(errors.contains_key("hole_2_par"));
    assert!(errors.contains_key("hole_4_index"));
    assert!(errors.contains_key("tee_box_t2_men_slope"));
    assert!(errors.contains_key("tee_box_t3_color"));
}

#[test]
fn course_requires_eighteen_holes_and_a_tee_box() {
    let mut short = eighteen_holes();
    short.truncate(17);
    let course = course(short, vec![]);
    let errors = validate_course(&course);

    assert!(errors.contains_key("holes"));
    assert!(errors.contains_key("tee_boxes"));
}

#[test]
fn course_par_is_derived_from_holes() {
    let mut holes = eighteen_holes();
    holes[10].par = 3;
    let course = course(holes, vec![white_tees()]);
    assert_eq!(course.par(), 71);
}
