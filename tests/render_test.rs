use querychain::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct Invoice;
struct Customer;

#[test]
fn test_typed_tables() {
    init_tracing();
    let invoice = Table::of::<Invoice>().alias("i");
    let customer = Table::of::<Customer>().alias("c");

    let query = Select::new()
        .column(invoice.var("getNumber"))
        .column(customer.var("getName"))
        .from([invoice.clone()])
        .right_outer_join(customer.clone())
        .on(invoice.var("getCustomerId").eq_col(&customer.var("getId")))
        .where_(any_of([
            invoice.var("getStatus").eq("open"),
            invoice.var("getStatus").eq("late"),
        ]))
        .order_by(OrderBy::new().desc(invoice.var("getNumber")));

    let q = query.to_query().expect("render SQL");
    assert_eq!(
        q.sql,
        "SELECT i.number, c.name FROM Invoice i RIGHT OUTER JOIN Customer c \
         ON i.customerId = c.id WHERE i.status = ?1 OR i.status = ?2 ORDER BY i.number DESC"
    );
    assert_eq!(q.params.len(), 2);
}

#[test]
fn test_schema_and_dialect_from_config_files() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let schema_path = dir.path().join("entities.toml");
    std::fs::write(
        &schema_path,
        r#"
        [[entities]]
        type_name = "Invoice"
        name = "Bill"

        [[entities.columns]]
        accessor = "getNumber"
        name = "BILL_NO"
        "#,
    )
    .unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "dialect = \"jpql\"\nschema = {:?}\n",
            schema_path.display().to_string()
        ),
    )
    .unwrap();

    let config = RenderConfig::load(&config_path).expect("load config");
    let schema = config.load_schema().expect("load schema");
    let invoice = Table::new("Invoice");
    let query = Select::new()
        .column(invoice.var("getNumber"))
        .from([invoice.clone()])
        .where_(invoice.var("getNumber").gt(10));

    let jpql = query.to_query_with(config.dialect, &schema).unwrap();
    assert_eq!(
        jpql.sql,
        "SELECT Bill.number FROM Bill Bill WHERE Bill.number > ?1"
    );

    let sql = query.to_query_with(Dialect::Sql, &schema).unwrap();
    assert_eq!(sql.sql, "SELECT Bill.bill_no FROM Bill WHERE Bill.bill_no > ?1");
}

#[test]
fn test_render_function_and_dialect_names() {
    init_tracing();
    let t = Table::new("Task");
    let tree = Select::new()
        .from([t.clone()])
        .where_(t.var("getTitle").like("fix%").ignore_case())
        .build()
        .unwrap();

    let dialect: Dialect = "jpql".parse().unwrap();
    let q = render(&tree, dialect, &ConventionSchema).unwrap();
    assert_eq!(q.sql, "SELECT Task FROM Task Task WHERE lower(Task.title) LIKE ?1");
    assert_eq!(q.params[&1], Value::from("fix%"));

    let q = render(&tree, "ansi".parse().unwrap(), &ConventionSchema).unwrap();
    assert_eq!(q.sql, "SELECT Task.* FROM Task WHERE LOWER(Task.title) SIMILAR TO ?1");

    assert!("cobol".parse::<Dialect>().is_err());
}

#[test]
fn test_malformed_tree_reports_error() {
    init_tracing();
    let t = Table::new("Task");
    let err = Select::new()
        .from([t.clone()])
        .where_(t.var("getId").eq(1))
        .where_(t.var("getId").eq(2))
        .to_query()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Ambiguous WHERE clause: expected at most one, found 2"
    );
}
