use chrono::{TimeZone, Utc};
use filter_syntax::{
    Comparator, Condition, FilterExpr, OData, parse, render,
};
use model::schema::EventField;

fn reminder_filter() -> FilterExpr {
    let start = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 3, 16, 0, 0, 0).unwrap();
    FilterExpr::conjunction(vec![
        FilterExpr::leaf(Condition::on(EventField::Status, Comparator::Equal, 1)),
        FilterExpr::leaf(Condition::on(
            EventField::StartDate,
            Comparator::GreaterOrEqual,
            start,
        )),
        FilterExpr::leaf(Condition::on(EventField::StartDate, Comparator::LessThan, end)),
        FilterExpr::leaf(Condition::on(
            EventField::RegisteredAttendeesCount,
            Comparator::GreaterThan,
            0,
        )),
    ])
}

#[test]
fn test_render_reminder_filter() {
    assert_eq!(
        render(&reminder_filter(), &OData),
        "Status eq 1 and StartDate ge 2024-03-15T00:00:00.0000000Z \
         and StartDate lt 2024-03-16T00:00:00.0000000Z and RegisteredAttendeesCount gt 0"
    );
}

#[test]
fn test_rendered_filter_parses_back() {
    let expr = reminder_filter();
    assert_eq!(parse(&expr.to_string()).unwrap(), expr);
}

#[test]
fn test_nested_groups_parse_back() {
    let input = "Status eq 1 and (TeamId eq 'a''b' or TeamId eq null) and not (Audience eq 1)";
    let expr = parse(input).unwrap();
    assert_eq!(expr.to_string(), input);
}

#[test]
fn test_ast_serializes_to_json() {
    let expr = parse("Status eq 1").unwrap();
    let json = serde_json::to_value(&expr).unwrap();
    assert_eq!(json["Leaf"]["field"], "Status");
    assert_eq!(json["Leaf"]["op"], "Equal");
    assert_eq!(json["Leaf"]["value"]["Int"], 1);

    let back: FilterExpr = serde_json::from_value(json).unwrap();
    assert_eq!(back, expr);
}
