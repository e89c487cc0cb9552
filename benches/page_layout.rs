// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for page layout and section gating.
//!
//! Measures the performance of:
//! - Building the page and measuring every section
//! - Scrolling the viewport through the whole page
//! - Relayout after a window resize

use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::app::config::Config;
use iced_folio::content::Portfolio;
use iced_folio::i18n::fluent::I18n;
use iced_folio::navigation::Location;
use iced_folio::ui::page::{Page, PageEnv};
use iced_folio::ui::state::Span;
use std::hint::black_box;
use std::time::Instant;

const VIEWPORT_HEIGHT: f32 = 736.0;

fn fixture() -> (Config, I18n, Portfolio) {
    let portfolio = Portfolio::embedded().expect("embedded content parses");
    (Config::default(), I18n::default(), portfolio)
}

/// Benchmark page construction and mount.
fn bench_build_page(c: &mut Criterion) {
    let (config, i18n, portfolio) = fixture();
    let env = PageEnv {
        i18n: &i18n,
        portfolio: &portfolio,
        reduce_motion: true,
        now: Instant::now(),
    };

    let mut group = c.benchmark_group("page_layout");
    group.bench_function("build_and_mount", |b| {
        b.iter(|| {
            let mut page = Page::new(&config, &env, black_box(1280.0));
            page.mount(&Location::default(), &env);
            black_box(page.layout().total_height());
        });
    });
    group.finish();
}

/// Benchmark scrolling from top to bottom, building sections on the way.
fn bench_scroll_through(c: &mut Criterion) {
    let (config, i18n, portfolio) = fixture();
    let env = PageEnv {
        i18n: &i18n,
        portfolio: &portfolio,
        reduce_motion: true,
        now: Instant::now(),
    };

    let mut group = c.benchmark_group("page_layout");
    group.bench_function("scroll_through", |b| {
        b.iter(|| {
            let mut page = Page::new(&config, &env, 1280.0);
            page.mount(&Location::default(), &env);
            let mut top = 0.0;
            while top < page.layout().total_height() {
                black_box(page.observe(Span::new(top, VIEWPORT_HEIGHT), &env));
                top += VIEWPORT_HEIGHT / 2.0;
            }
        });
    });
    group.finish();
}

/// Benchmark relayout across the responsive breakpoints.
fn bench_resize(c: &mut Criterion) {
    let (config, i18n, portfolio) = fixture();
    let env = PageEnv {
        i18n: &i18n,
        portfolio: &portfolio,
        reduce_motion: true,
        now: Instant::now(),
    };
    let mut page = Page::new(&config, &env, 1280.0);
    page.mount(&Location::default(), &env);

    let mut group = c.benchmark_group("page_layout");
    group.bench_function("resize", |b| {
        b.iter(|| {
            for width in [375.0, 700.0, 1024.0, 1440.0] {
                black_box(page.resize(width, &env));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_build_page, bench_scroll_through, bench_resize);
criterion_main!(benches);
