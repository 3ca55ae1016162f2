use filter_syntax::{DialectKind, Sql, parse, render};

#[test]
fn test_render_parsed_filter_as_sql() {
    let expr = parse(
        "Status eq 1 and StartDate ge 2024-03-15T00:00:00.0000000Z and RegisteredAttendeesCount gt 0",
    )
    .unwrap();

    assert_eq!(
        render(&expr, &Sql),
        r#""Status" = 1 AND "StartDate" >= TIMESTAMPTZ '2024-03-15T00:00:00.000000000Z' AND "RegisteredAttendeesCount" > 0"#
    );
}

#[test]
fn test_render_null_and_strings_as_sql() {
    let expr = parse("TeamId eq null or Name ne 'O''Brien'").unwrap();
    assert_eq!(
        render(&expr, DialectKind::Sql.dialect()),
        r#""TeamId" IS NULL OR "Name" <> 'O''Brien'"#
    );
}

#[test]
fn test_render_not_and_booleans_as_sql() {
    let expr = parse("not (IsRegistrationClosed eq true)").unwrap();
    assert_eq!(
        render(&expr, &Sql),
        r#"NOT ("IsRegistrationClosed" = TRUE)"#
    );
}
