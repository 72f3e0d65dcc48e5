//! Plain SQL rendering tests.

use pretty_assertions::assert_eq;

use crate::ast::*;
use crate::schema::{ColumnDef, ConventionSchema, EntityDef, Schema};
use crate::transpiler::grammar::AnsiGrammar;
use crate::transpiler::{Dialect, SelectBuilder, SelectHandler, ToQuery};

fn users() -> Table {
    Table::new("User").alias("u")
}

#[test]
fn test_select_star_fallback() {
    let a = Table::new("A");
    let b = Table::new("B");
    let q = Select::new().from([a, b]).to_query().unwrap();
    assert_eq!(q.sql, "SELECT A.*, B.* FROM A, B");
    assert!(q.params.is_empty());
}

#[test]
fn test_select_star_includes_joined_tables() {
    let a = Table::new("A");
    let b = Table::new("B");
    let q = Select::new()
        .from([a.clone()])
        .join(b.clone())
        .on(a.var("getId").eq_col(&b.var("getAId")))
        .to_query()
        .unwrap();
    assert_eq!(q.sql, "SELECT A.*, B.* FROM A JOIN B ON A.id = B.aId");
}

#[test]
fn test_whole_table_selection() {
    let u = users();
    let r = Table::new("Role").alias("r");
    let q = Select::tables([r.clone()])
        .from([u.clone(), r.clone()])
        .to_query()
        .unwrap();
    assert_eq!(q.sql, "SELECT r.* FROM User u, Role r");
}

#[test]
fn test_tables_and_columns_keep_chain_order() {
    let u = users();
    let r = Table::new("Role").alias("r");
    let q = Select::tables([r.clone()])
        .column(u.var("getEmail"))
        .from([u.clone(), r.clone()])
        .to_query()
        .unwrap();
    assert_eq!(q.sql, "SELECT r.*, u.email FROM User u, Role r");
}

#[test]
fn test_distinct_column() {
    let x = Table::new("Item").alias("X");
    let q = Select::new()
        .column(x.var("getName"))
        .from([x.clone()])
        .distinct()
        .to_query()
        .unwrap();
    assert_eq!(q.sql, "SELECT DISTINCT X.name FROM Item X");
}

#[test]
fn test_distinct_with_count() {
    let x = Table::new("Item").alias("X");
    let q = Select::new()
        .column(x.var("getName"))
        .from([x.clone()])
        .distinct()
        .count()
        .group_by([x.var("getName")])
        .to_query()
        .unwrap();
    assert_eq!(
        q.sql,
        "SELECT DISTINCT X.name, COUNT(*) FROM Item X GROUP BY X.name"
    );
}

#[test]
fn test_count_without_columns_keeps_star_fallback() {
    let x = Table::new("Item");
    let q = Select::new().from([x]).count().to_query().unwrap();
    assert_eq!(q.sql, "SELECT Item.*, COUNT(*) FROM Item");
}

#[test]
fn test_where_clause() {
    let u = users();
    let q = Select::new()
        .column(u.var("getId"))
        .from([u.clone()])
        .where_(
            ExpressionChain::new(u.var("isActive").eq(true))
                .and(u.var("getAge").ge(18))
                .and(u.var("getAge").lt(65)),
        )
        .to_query()
        .unwrap();
    assert_eq!(
        q.sql,
        "SELECT u.id FROM User u WHERE u.active = ?1 AND u.age >= ?2 AND u.age < ?3"
    );
    assert_eq!(q.params[&1], Value::Bool(true));
    assert_eq!(q.params[&2], Value::Int(18));
    assert_eq!(q.params[&3], Value::Int(65));
}

#[test]
fn test_all_comparators() {
    let u = users();
    let q = Select::new()
        .column(u.var("getId"))
        .from([u.clone()])
        .where_(all_of([
            u.var("getA").eq(1),
            u.var("getB").ne(2),
            u.var("getC").lt(3),
            u.var("getD").le(4),
            u.var("getE").gt(5),
            u.var("getF").ge(6),
            u.var("getG").like("x%"),
        ]))
        .to_query()
        .unwrap();
    assert_eq!(
        q.sql,
        "SELECT u.id FROM User u WHERE u.a = ?1 AND u.b != ?2 AND u.c < ?3 AND u.d <= ?4 \
         AND u.e > ?5 AND u.f >= ?6 AND u.g SIMILAR TO ?7"
    );
    assert_eq!(q.params.len(), 7);
}

#[test]
fn test_column_to_column_relation_binds_nothing() {
    let a = Table::new("Person").alias("a");
    let b = Table::new("Person").alias("b");
    let q = Select::new()
        .column(a.var("getName"))
        .from([a.clone(), b.clone()])
        .where_(a.var("getManagerId").eq_col(&b.var("getId")))
        .to_query()
        .unwrap();
    assert_eq!(
        q.sql,
        "SELECT a.name FROM Person a, Person b WHERE a.managerId = b.id"
    );
    assert!(q.params.is_empty());
}

#[test]
fn test_case_insensitive_column_comparison() {
    let a = Table::new("Person").alias("a");
    let b = Table::new("Person").alias("b");
    let q = Select::new()
        .from([a.clone(), b.clone()])
        .where_(a.var("getName").eq_col(&b.var("getName")).ignore_case())
        .to_query()
        .unwrap();
    assert_eq!(
        q.sql,
        "SELECT a.*, b.* FROM Person a, Person b WHERE LOWER(a.name) = LOWER(b.name)"
    );
}

#[test]
fn test_join_qualifiers() {
    let a = Table::new("A").alias("a");
    let b = Table::new("B").alias("b");
    let c = Table::new("C").alias("c");
    let d = Table::new("D").alias("d");
    let q = Select::new()
        .column(a.var("getId"))
        .from([a.clone()])
        .left_outer_join(b.clone())
        .on(a.var("getId").eq_col(&b.var("getAId")))
        .right_inner_join(c.clone())
        .on(a.var("getId").eq_col(&c.var("getAId")))
        .left_join(d.clone())
        .on(a.var("getId").eq_col(&d.var("getAId")))
        .to_query()
        .unwrap();
    assert_eq!(
        q.sql,
        "SELECT a.id FROM A a LEFT OUTER JOIN B b ON a.id = b.aId \
         RIGHT INNER JOIN C c ON a.id = c.aId LEFT JOIN D d ON a.id = d.aId"
    );
}

#[test]
fn test_join_without_condition() {
    let a = Table::new("A");
    let b = Table::new("B");
    let q = Select::new()
        .column(a.var("getId"))
        .from([a.clone()])
        .right_outer_join(b)
        .finish()
        .to_query()
        .unwrap();
    assert_eq!(q.sql, "SELECT A.id FROM A RIGHT OUTER JOIN B");
}

#[test]
fn test_join_params_numbered_before_where() {
    let a = Table::new("A");
    let b = Table::new("B");
    let q = Select::new()
        .column(a.var("getId"))
        .from([a.clone()])
        .join(b.clone())
        .on(ExpressionChain::new(a.var("getId").eq_col(&b.var("getAId"))).and(b.var("getKind").eq("x")))
        .where_(a.var("getName").eq("y"))
        .to_query()
        .unwrap();
    assert_eq!(
        q.sql,
        "SELECT A.id FROM A JOIN B ON A.id = B.aId AND B.kind = ?1 WHERE A.name = ?2"
    );
    assert_eq!(q.params[&1], Value::String("x".into()));
    assert_eq!(q.params[&2], Value::String("y".into()));
}

#[test]
fn test_order_by_and_group_by() {
    let x = Table::new("Sale").alias("X");
    let q = Select::new()
        .column(x.var("getRegion"))
        .column(x.var("getYear"))
        .count()
        .from([x.clone()])
        .order_by(OrderBy::new().asc(x.var("getRegion")).desc(x.var("getYear")))
        .group_by([x.var("getRegion"), x.var("getYear")])
        .to_query()
        .unwrap();
    assert_eq!(
        q.sql,
        "SELECT X.region, X.year, COUNT(*) FROM Sale X \
         ORDER BY X.region, X.year DESC GROUP BY X.region, X.year"
    );
}

#[test]
fn test_in_and_not_in() {
    let u = users();
    let q = Select::new()
        .column(u.var("getId"))
        .from([u.clone()])
        .where_(
            ExpressionChain::new(u.var("getRole").is_in(["admin", "owner"]))
                .or(u.var("getId").not_in([7, 8])),
        )
        .to_query()
        .unwrap();
    assert_eq!(
        q.sql,
        "SELECT u.id FROM User u WHERE u.role IN (?1) OR u.id NOT IN (?2)"
    );
    assert_eq!(
        q.params[&1],
        Value::List(vec![Value::from("admin"), Value::from("owner")])
    );
}

#[test]
fn test_schema_overrides() {
    let mut schema = Schema::new();
    schema.add_entity(EntityDef {
        type_name: "User".into(),
        name: Some("app_users".into()),
        columns: vec![ColumnDef {
            accessor: "getEmail".into(),
            name: "EMAIL_ADDRESS".into(),
        }],
    });
    let u = Table::new("User");
    let q = Select::new()
        .column(u.var("getEmail"))
        .from([u.clone()])
        .where_(u.var("isVerified").eq(true))
        .to_query_with(Dialect::Sql, &schema)
        .unwrap();
    assert_eq!(
        q.sql,
        "SELECT app_users.email_address FROM app_users WHERE app_users.verified = ?1"
    );

    let plain = Select::new()
        .column(u.var("getEmail"))
        .from([u])
        .to_query_with(Dialect::Sql, &ConventionSchema)
        .unwrap();
    assert_eq!(plain.sql, "SELECT User.email FROM User");
}

#[test]
fn test_rendered_query_json() {
    let u = users();
    let q = Select::new()
        .column(u.var("getId"))
        .from([u.clone()])
        .where_(u.var("getName").eq("ann"))
        .to_query()
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&q.to_json().unwrap()).unwrap();
    assert_eq!(json["sql"], "SELECT u.id FROM User u WHERE u.name = ?1");
    assert_eq!(json["params"]["1"]["String"], "ann");
}

#[test]
fn test_deferred_star_resolved_by_from_and_join() {
    let a = Table::new("A");
    let b = Table::new("B");
    let c = Table::new("C");

    let mut builder = SelectBuilder::new(&AnsiGrammar, &ConventionSchema);
    builder.handle_select(&[], &[], false, false).unwrap();
    builder.handle_from(&[a.clone(), b]).unwrap();
    builder
        .handle_join(&c, JoinDirection::Left, JoinKind::None, None)
        .unwrap();
    let q = builder.finish();
    assert_eq!(q.sql, "SELECT A.*, B.*, C.* FROM A, B LEFT JOIN C");

    let mut builder = SelectBuilder::new(&AnsiGrammar, &ConventionSchema);
    builder.handle_select(&[], &[], false, false).unwrap();
    builder.handle_from(&[a.clone()]).unwrap();
    builder
        .handle_where(&ExpressionChain::new(a.var("getX").eq(1)))
        .unwrap();
    let q = builder.finish();
    assert_eq!(q.sql, "SELECT A.* FROM A WHERE A.x = ?1");
    assert_eq!(q.params[&1], Value::Int(1));
}

#[test]
fn test_count_alone_suppresses_deferred_star() {
    let a = Table::new("A");
    let b = Table::new("B");
    let mut builder = SelectBuilder::new(&AnsiGrammar, &ConventionSchema);
    builder.handle_select(&[], &[], false, true).unwrap();
    builder.handle_from(&[a]).unwrap();
    builder
        .handle_join(&b, JoinDirection::None, JoinKind::Inner, None)
        .unwrap();
    assert_eq!(builder.finish().sql, "SELECT COUNT(*) FROM A INNER JOIN B");
}
