use std::time::{Duration, Instant};

use browser_rum::{obfuscate, AgentSettings, BrowserMonitor, Transaction};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

fn bench_obfuscate(c: &mut Criterion) {
    let key: Vec<u8> = (1..=13).collect();
    let short = "Controller/users/show";
    let long = "a happy piece of small text".repeat(50);

    c.bench_function("obfuscate_transaction_name", |b| {
        b.iter(|| {
            let _ = obfuscate(black_box(&key), black_box(short));
        })
    });

    c.bench_function("obfuscate_long_text", |b| {
        b.iter(|| {
            let _ = obfuscate(black_box(&key), black_box(&long));
        })
    });
}

fn bench_timing_footer(c: &mut Criterion) {
    let settings = AgentSettings {
        beacon: "beacon".to_string(),
        browser_key: "browserKey".to_string(),
        application_ids: vec!["5".to_string()],
        license_key: "0123456789abc".to_string(),
        js_agent_loader: "loader".to_string(),
        capture_page_attributes: true,
        ..AgentSettings::default()
    };
    let monitor = BrowserMonitor::new(settings);

    c.bench_function("timing_footer", |b| {
        b.iter(|| {
            let mut txn = Transaction::started_at(Instant::now() - Duration::from_secs(1));
            txn.set_name("Controller/users/show");
            txn.add_custom_attribute("user", json!("user"));
            let _ = monitor.timing_footer(black_box(&mut txn));
        })
    });
}

criterion_group!(benches, bench_obfuscate, bench_timing_footer);
criterion_main!(benches);
