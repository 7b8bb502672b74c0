use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use lazydb::Query;

/// Build a Query with `n` selected columns and `n` WHERE conditions:
/// SELECT `col0`, `col1`, ... FROM `t` WHERE `col0` = 0 AND `col1` = 1 ...
fn build_select_query(n: usize) -> Query {
    let mut query = Query::new();
    let columns: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let refs: Vec<&str> = columns.iter().map(String::as_str).collect();
    query = query.select(&refs).from("t");
    for (i, column) in columns.iter().enumerate() {
        query = query.and_where(column, "=", i as i64);
    }
    query
}

fn bench_to_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/to_sql");

    for n in [1, 5, 10, 50, 100] {
        let query = build_select_query(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &query, |b, query| {
            b.iter(|| black_box(query.to_sql()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let query = build_select_query(n);
                black_box(query.to_sql());
            });
        });
    }

    group.finish();
}

fn bench_multi_row_insert(c: &mut Criterion) {
    use lazydb::Value;

    let mut group = c.benchmark_group("sql_builder/multi_row_insert");

    for rows in [1, 10, 100, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            b.iter(|| {
                let mut query = Query::new().insert_into("t").value("a", 0i64).value("b", "x");
                for i in 1..rows {
                    query =
                        query.values_row(vec![Value::Int(i as i64), Value::Text("x".to_string())]);
                }
                black_box(query.to_sql());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_to_sql,
    bench_build_and_render,
    bench_multi_row_insert
);
criterion_main!(benches);
