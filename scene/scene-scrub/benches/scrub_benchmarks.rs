//! Benchmarks for scene-scrub operations.
//!
//! Run with: cargo bench -p scene-scrub
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p scene-scrub -- --save-baseline main
//! 2. After changes: cargo bench -p scene-scrub -- --baseline main

#![allow(
    missing_docs,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scene_scrub::{
    build_dirty_mask, reindex_mesh_references, scrub_scene, validate_array, MeshIndexMap,
    MeshSlot, RecordingSink, ScrubParams,
};
use scene_types::{Face, Mesh, Node, Point3, Scene, Vector3};

// =============================================================================
// Test Scene Generation
// =============================================================================

/// Create a grid mesh with `n * n` vertices, normals and one UV channel.
fn create_grid(n: usize) -> Mesh {
    let mut mesh = Mesh::new("grid");
    for y in 0..n {
        for x in 0..n {
            mesh.positions.push(Point3::new(x as f64, y as f64, 0.0));
        }
    }
    let count = mesh.positions.len();
    mesh.normals = Some(
        (0..count)
            .map(|i| Vector3::new(0.0, (i % 7) as f64 * 0.01, 1.0))
            .collect(),
    );
    mesh.texture_coords[0] = Some(
        mesh.positions
            .iter()
            .map(|p| Vector3::new(p.x / n as f64, p.y / n as f64, 0.0))
            .collect(),
    );

    for y in 0..n - 1 {
        for x in 0..n - 1 {
            let i = (y * n + x) as u32;
            let row = n as u32;
            mesh.faces.push(Face::new(vec![i, i + 1, i + row + 1]));
            mesh.faces.push(Face::new(vec![i, i + row + 1, i + row]));
        }
    }
    // A few wireframe edges so the dirty mask is exercised.
    for x in 0..n - 1 {
        let i = x as u32;
        mesh.faces.push(Face::new(vec![i, i + 1]));
    }
    mesh.update_primitive_types();
    mesh
}

/// Create a node chain of the given depth, each node referencing every mesh.
fn create_chain(depth: usize, mesh_count: u32) -> Node {
    let mut node = Node::new("leaf").with_meshes((0..mesh_count).collect());
    for level in 0..depth {
        node = Node::new(format!("n{level}"))
            .with_meshes((0..mesh_count).collect())
            .with_child(node);
    }
    node
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_validate_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_array");

    for n in [32, 128, 512] {
        let mesh = create_grid(n);
        let normals = mesh.normals.clone().unwrap_or_default();
        group.throughput(Throughput::Elements(normals.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(normals.len()), &normals, |b, arr| {
            b.iter(|| validate_array(black_box(arr), None));
        });
    }

    group.finish();
}

fn bench_dirty_mask(c: &mut Criterion) {
    let mesh = create_grid(256);
    c.bench_function("build_dirty_mask/65536", |b| {
        b.iter(|| {
            build_dirty_mask(
                black_box(&mesh.faces),
                mesh.primitive_types,
                mesh.vertex_count(),
            )
        });
    });
}

fn bench_scrub_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scrub_scene");

    for meshes in [4usize, 16] {
        let mut template = Vec::new();
        for i in 0..meshes {
            let mut mesh = create_grid(64);
            if i % 4 == 0 {
                mesh.positions[10].x = f64::NAN;
            }
            template.push(mesh);
        }
        let scene = Scene::new(template, create_chain(32, meshes as u32));

        group.bench_with_input(BenchmarkId::from_parameter(meshes), &scene, |b, scene| {
            b.iter_batched(
                || scene.clone(),
                |mut scene| {
                    let mut sink = RecordingSink::new();
                    let _ = scrub_scene(&mut scene, &ScrubParams::default(), &mut sink);
                    scene
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_reindex(c: &mut Criterion) {
    let map: MeshIndexMap = (0..64u32)
        .map(|i| {
            if i % 3 == 0 {
                MeshSlot::Removed
            } else {
                MeshSlot::Kept(i - i / 3 - 1)
            }
        })
        .collect();
    let root = create_chain(1000, 64);

    c.bench_function("reindex_mesh_references/1000", |b| {
        b.iter_batched(
            || root.clone(),
            |mut root| {
                reindex_mesh_references(&mut root, black_box(&map));
                root
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_validate_array,
    bench_dirty_mask,
    bench_scrub_scene,
    bench_reindex
);
criterion_main!(benches);
