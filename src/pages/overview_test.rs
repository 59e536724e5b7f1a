use super::*;

#[test]
fn chart_points_map_dates_and_counts() {
    let samples = vec![
        MonthUsage {
            created_at: "2024-03-01T00:00:00Z".to_owned(),
            user_count: 12,
        },
        MonthUsage {
            created_at: "2024-03-02T00:00:00Z".to_owned(),
            user_count: 30,
        },
    ];
    let points = chart_points(&samples);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].date, "2024-3-1");
    assert_eq!(points[0].count, 12);
    assert_eq!(points[1].date, "2024-3-2");
    assert_eq!(points[1].count, 30);
}

#[test]
fn chart_points_of_empty_series_is_empty() {
    assert!(chart_points(&[]).is_empty());
}
