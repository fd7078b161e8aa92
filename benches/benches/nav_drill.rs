// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use trellis_menu_tree::{MenuItem, NodeId, Tree};
use trellis_navigator::adapters::menu_tree::apply_response;
use trellis_navigator::navigator::LevelNavigator;

fn build_menu(tops: usize, seconds: usize, thirds: usize) -> (Tree, Vec<NodeId>, Vec<NodeId>) {
    let mut tree = Tree::new();
    let mut top_ids = Vec::with_capacity(tops);
    let mut first_seconds = Vec::with_capacity(tops);
    for t in 0..tops {
        let top = tree.insert(None, MenuItem::branch(format!("top-{t}")));
        top_ids.push(top);
        for s in 0..seconds {
            let second = tree.insert(Some(top), MenuItem::branch(format!("second-{t}-{s}")));
            if s == 0 {
                first_seconds.push(second);
            }
            for d in 0..thirds {
                let _ = tree.insert(
                    Some(second),
                    MenuItem::leaf(format!("third-{t}-{s}-{d}"), format!("/{t}/{s}/{d}")),
                );
            }
        }
    }
    let _ = tree.commit();
    (tree, top_ids, first_seconds)
}

fn bench_drill_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("drill_cycle");
    for tops in [8usize, 32, 128] {
        let (tree, top_ids, first_seconds) = build_menu(tops, 8, 4);
        group.throughput(Throughput::Elements(tops as u64));
        group.bench_function(format!("tops_{tops}"), |b| {
            b.iter_batched(
                || tree.clone(),
                |mut tree| {
                    let mut nav: LevelNavigator<NodeId> = LevelNavigator::new();
                    for (top, second) in top_ids.iter().zip(&first_seconds) {
                        let r = nav.tap_top(*top, &tree);
                        apply_response(&mut tree, &r);
                        nav.slide_finished();
                        let r = nav.tap_second(*second, &tree);
                        apply_response(&mut tree, &r);
                        nav.slide_finished();
                        let r = nav.back(&tree);
                        apply_response(&mut tree, &r);
                        nav.slide_finished();
                        let r = nav.back(&tree);
                        apply_response(&mut tree, &r);
                        nav.slide_finished();
                    }
                    black_box(tree.commit())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_flag_churn(c: &mut Criterion) {
    let (mut tree, top_ids, _) = build_menu(64, 8, 4);
    c.bench_function("flag_churn_commit", |b| {
        b.iter(|| {
            for top in &top_ids {
                tree.set_expanded(*top, true);
                tree.set_expanded(*top, false);
            }
            black_box(tree.commit())
        });
    });
}

criterion_group!(benches, bench_drill_cycle, bench_flag_churn);
criterion_main!(benches);
