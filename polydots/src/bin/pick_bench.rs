use polydots::{Puzzle, PuzzleOptions};
use std::fmt::Write;
use std::time::Instant;

// A w x h grid of unit squares, one <path> per cell, so every interior edge is shared.
fn grid_svg(w: usize, h: usize, cell: f32) -> String {
    let mut svg = String::from("<svg xmlns=\"http://www.w3.org/2000/svg\">");
    for j in 0..h {
        for i in 0..w {
            let x0 = i as f32 * cell; let y0 = j as f32 * cell;
            let x1 = x0 + cell; let y1 = y0 + cell;
            let _ = write!(svg, "<path id=\"c{}_{}\" fill=\"#4a8\" d=\"M {} {} L {} {} L {} {} L {} {} Z\"/>", i, j, x0, y0, x1, y0, x1, y1, x0, y1);
        }
    }
    svg.push_str("</svg>");
    svg
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut side = 60usize;
    let mut picks = 10000usize;
    let mut radius = 3.0f32;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--side=") { if let Ok(v)=val.parse() { side=v; } }
        else if let Some(val)=a.strip_prefix("--picks=") { if let Ok(v)=val.parse() { picks=v; } }
        else if let Some(val)=a.strip_prefix("--radius=") { if let Ok(v)=val.parse() { radius=v; } }
        else if let Some(val)=a.strip_prefix("--assert-ms=") { if let Ok(v)=val.parse() { assert_ms=Some(v); } }
    }

    let cell = 8.0f32;
    let t_load = Instant::now();
    let opts = PuzzleOptions { pick_radius: radius, ..PuzzleOptions::default() };
    let mut p = match Puzzle::from_svg(&grid_svg(side, side, cell), &opts) {
        Ok(p) => p,
        Err(e) => { eprintln!("load failed: {}", e); std::process::exit(1); }
    };
    let load_ms = t_load.elapsed().as_secs_f64() * 1000.0;

    // Pick points cycle across the grid, slightly off each vertex
    let mut times_ms: Vec<f64> = Vec::with_capacity(picks);
    let mut hits = 0usize;
    for k in 0..picks {
        let x = (k % side) as f32 * cell + 1.1;
        let y = ((k / side) % side) as f32 * cell + 0.9;
        let t0 = Instant::now();
        if p.pick_vertex(x, y).is_some() { hits += 1; }
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
    }
    times_ms.sort_by(|a,b| a.total_cmp(b));

    // Trace every horizontal edge, then every vertical one
    let t_connect = Instant::now();
    let mut connected = 0usize;
    for j in 0..=side { for i in 0..side {
        let a = p.vertex_at(i as f32 * cell, j as f32 * cell);
        let b = p.vertex_at((i + 1) as f32 * cell, j as f32 * cell);
        if let (Some(a), Some(b)) = (a, b) { if !p.connect(a, b).is_rejected() { connected += 1; } }
    } }
    for i in 0..=side { for j in 0..side {
        let a = p.vertex_at(i as f32 * cell, j as f32 * cell);
        let b = p.vertex_at(i as f32 * cell, (j + 1) as f32 * cell);
        if let (Some(a), Some(b)) = (a, b) { if !p.connect(a, b).is_rejected() { connected += 1; } }
    } }
    let connect_ms = t_connect.elapsed().as_secs_f64() * 1000.0;

    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    let p99 = percentile(&times_ms, 0.99);
    println!("side={} vertices={} polygons={} load_ms={:.3} picks={} radius={} hits={} median_ms={:.4} p90_ms={:.4} p99_ms={:.4} connected={} connect_ms={:.3} solved={}",
        side, p.vertex_count(), p.polygon_count(), load_ms, picks, radius, hits, med, p90, p99, connected, connect_ms, p.is_solved());
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
