use approx::assert_relative_eq;
use boxoffice_charts::ChartError;
use boxoffice_charts::api::{ChartConfig, yearly_line_chart};
use boxoffice_charts::core::{Metric, Movie, year_start};

fn movies() -> Vec<Movie> {
    vec![
        Movie::new("A1", "Action", 2001, 10.0, 100.0),
        Movie::new("A2", "Action", 2002, 20.0, 50.0),
        Movie::new("D1", "Drama", 2001, 5.0, 30.0),
        Movie::new("C1", "Comedy", 2003, 8.0, 60.0),
    ]
}

#[test]
fn series_hold_yearly_totals_in_year_order() {
    let frame = yearly_line_chart(&movies(), &ChartConfig::xy_plot()).expect("frame");

    let revenue = frame.series(Metric::Revenue).expect("revenue series");
    let years: Vec<i32> = revenue.points.iter().map(|p| p.year).collect();
    let values: Vec<f64> = revenue.points.iter().map(|p| p.value).collect();
    assert_eq!(years, vec![2001, 2002, 2003]);
    assert_eq!(values, vec![130.0, 50.0, 60.0]);

    let budget = frame.series(Metric::Budget).expect("budget series");
    let values: Vec<f64> = budget.points.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![15.0, 20.0, 8.0]);
}

#[test]
fn shared_y_axis_runs_from_zero_to_largest_total() {
    // 500x500 frame, margins 40/40/40/80 -> 380x420 plot area.
    let frame = yearly_line_chart(&movies(), &ChartConfig::xy_plot()).expect("frame");

    assert_eq!(frame.y_max, 130.0);
    assert_eq!(frame.y_scale.range(), (420.0, 0.0));

    let revenue = frame.series(Metric::Revenue).expect("revenue series");
    assert_eq!(revenue.points[0].y, 0.0);

    let budget = frame.series(Metric::Budget).expect("budget series");
    assert_relative_eq!(budget.points[0].y, 420.0 - 15.0 / 130.0 * 420.0, epsilon = 1e-9);
}

#[test]
fn x_axis_places_years_on_calendar_time() {
    let frame = yearly_line_chart(&movies(), &ChartConfig::xy_plot()).expect("frame");

    let revenue = frame.series(Metric::Revenue).expect("revenue series");
    let xs: Vec<f64> = revenue.points.iter().map(|p| p.x).collect();
    assert_eq!(xs[0], 0.0);
    assert_relative_eq!(xs[1], 190.0, epsilon = 1e-9);
    assert_eq!(xs[2], 380.0);
    assert_eq!(revenue.points[1].date, year_start(2002).expect("2002"));
}

#[test]
fn single_release_year_is_a_degenerate_time_domain() {
    let records = vec![
        Movie::new("A", "Action", 2004, 10.0, 100.0),
        Movie::new("B", "Drama", 2004, 20.0, 50.0),
    ];

    let result = yearly_line_chart(&records, &ChartConfig::xy_plot());
    assert!(matches!(result, Err(ChartError::DegenerateDomain { .. })));
}

#[test]
fn no_movies_is_empty_input() {
    let result = yearly_line_chart(&[], &ChartConfig::xy_plot());
    assert!(matches!(result, Err(ChartError::EmptyInput(_))));
}
