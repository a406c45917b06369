use image::Rgb;
use log::info;
use std::env;
use std::path::Path;
use superpixel_viz::config::render::{load_config, RenderToolConfig};
use superpixel_viz::diagnostics::{RenderReport, SegmentationSummary, TimingBreakdown, ViewReport};
use superpixel_viz::image::io::{read_json_file, save_canvas, write_json_file};
use superpixel_viz::image::Canvas;
use superpixel_viz::render::{gray, signed_rgb, unit_rgb};
use superpixel_viz::{PixelData, RenderPipeline, Segmentation, SuperpixelGraph};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    if config.output.is_empty() {
        return Err(format!("{config_path}: no outputs configured"));
    }

    let seg: Segmentation<PixelData> = read_json_file(&config.input)?;
    seg.validate()
        .map_err(|e| format!("Invalid segmentation {}: {e}", config.input.display()))?;
    let graph = SuperpixelGraph::from_segmentation(&seg);
    info!(
        "Loaded {}x{} segmentation with {} superpixels and {} adjacencies",
        seg.width(),
        seg.height(),
        seg.superpixels.len(),
        graph.edge_count()
    );

    let mut views = Vec::new();
    for (view, path) in [
        ("density", &config.output.density_image),
        ("color", &config.output.color_image),
        ("normals", &config.output.normals_image),
        ("graph", &config.output.graph_image),
    ] {
        let Some(path) = path else { continue };
        let (canvas, timing) = render_view(view, &seg, &graph, &config)?;
        save_canvas(&canvas, path)?;
        println!(
            "Saved {view} view to {} ({:.3} ms)",
            path.display(),
            timing.total_ms
        );
        views.push(ViewReport {
            view: view.to_string(),
            output: path.clone(),
            timing,
        });
    }

    if let Some(report_path) = &config.output.report_json {
        let report = RenderReport {
            segmentation: SegmentationSummary {
                width: seg.width(),
                height: seg.height(),
                superpixels: seg.superpixels.len(),
                assigned_pixels: seg.assigned_pixel_count(),
                adjacencies: graph.edge_count(),
            },
            views,
        };
        write_json_file(report_path, &report)?;
        println!("Saved render report to {}", report_path.display());
    }

    Ok(())
}

fn render_view(
    view: &str,
    seg: &Segmentation<PixelData>,
    graph: &SuperpixelGraph,
    config: &RenderToolConfig,
) -> Result<(Canvas, TimingBreakdown), String> {
    let colors = &config.colors;
    let pipeline = RenderPipeline::new(seg).with_background(Rgb(colors.background));
    let pipeline = match view {
        "density" => {
            let window = config.density;
            pipeline.with_dense_color(&seg.weights, move |d: f32| gray(window.to_byte(d)))
        }
        "color" => pipeline
            .with_superpixel_color_or(|sp| unit_rgb(sp.payload.color), Rgb(colors.invalid))
            .with_border(Rgb(colors.border)),
        "normals" => pipeline
            .with_superpixel_color_or(|sp| signed_rgb(sp.payload.normal), Rgb(colors.invalid))
            .with_border(Rgb(colors.border)),
        "graph" => pipeline.with_graph(graph, Rgb(colors.graph_edge)),
        _ => return Err(format!("unknown view {view}")),
    };
    Ok(pipeline.render_traced())
}

fn usage() -> String {
    "Usage: render_segmentation <config.json>".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Vector2, Vector3};
    use superpixel_viz::config::render::parse_config;
    use superpixel_viz::image::IndexImage;
    use superpixel_viz::WeightedAttribute;

    fn two_blocks() -> Segmentation<PixelData> {
        let labels = IndexImage::from_fn(4, 2, |x, _| (x >= 2) as i32);
        let samples: Vec<_> = (0..8)
            .map(|i| {
                WeightedAttribute::sample(
                    Vector2::new((i % 4) as f32, (i / 4) as f32),
                    0.1,
                    PixelData::new(Vector3::new(1.0, 0.0, 0.0), Vector3::z()),
                )
            })
            .collect();
        Segmentation::from_labels(&labels, &samples).unwrap()
    }

    #[test]
    fn known_views_render() {
        let seg = two_blocks();
        let graph = SuperpixelGraph::from_segmentation(&seg);
        let config = parse_config(r#"{ "input": "seg.json", "output": {} }"#).unwrap();
        for view in ["density", "color", "normals", "graph"] {
            let (canvas, timing) = render_view(view, &seg, &graph, &config).unwrap();
            assert_eq!(canvas.dimensions(), (4, 2));
            let expected = if matches!(view, "color" | "normals") { 2 } else { 1 };
            assert_eq!(timing.stages.len(), expected, "view={view}");
        }
    }

    #[test]
    fn unknown_view_is_rejected() {
        let seg = two_blocks();
        let graph = SuperpixelGraph::from_segmentation(&seg);
        let config = parse_config(r#"{ "input": "seg.json", "output": {} }"#).unwrap();
        let err = render_view("heatmap", &seg, &graph, &config).unwrap_err();
        assert_eq!(err, "unknown view heatmap");
    }
}
