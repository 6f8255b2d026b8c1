//! Bar geometry: rounded-top outlines filled with a vertical gradient.

use bevy::log::warn;
use bevy::prelude::*;
use bevy_asset::RenderAssetUsages;
use bevy_mesh::{Indices, PrimitiveTopology};
use lyon_tessellation::math::{Box2D, point};
use lyon_tessellation::path::Winding;
use lyon_tessellation::path::builder::BorderRadii;
use lyon_tessellation::path::Path;
use lyon_tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers,
};

use crate::model::Gradient;

const TOLERANCE: f32 = 0.1;

/// Bar mesh in local space: origin at the bottom-left corner, y up.
/// Only the two top corners are rounded.
pub fn bar_mesh(width: f32, height: f32, corner_radius: f32, gradient: Gradient) -> Mesh {
    let width = width.max(0.0);
    let height = height.max(0.0);
    let radius = corner_radius.min(width * 0.5).min(height).max(0.0);

    let (positions, indices) = if radius > 0.0 {
        match rounded_top_outline(width, height, radius) {
            Ok(buffers) => buffers,
            Err(err) => {
                warn!("bar tessellation failed, drawing square corners: {:?}", err);
                square_outline(width, height)
            }
        }
    } else {
        square_outline(width, height)
    };

    build_mesh(&positions, indices, height, gradient)
}

fn rounded_top_outline(
    width: f32,
    height: f32,
    radius: f32,
) -> Result<(Vec<[f32; 2]>, Vec<u32>), lyon_tessellation::TessellationError> {
    let mut builder = Path::builder();
    // Lyon names corners for a y-down space, so our top is its bottom
    builder.add_rounded_rectangle(
        &Box2D::new(point(0.0, 0.0), point(width, height)),
        &BorderRadii {
            top_left: 0.0,
            top_right: 0.0,
            bottom_left: radius,
            bottom_right: radius,
        },
        Winding::Positive,
    );
    let path = builder.build();

    let mut buffers: VertexBuffers<[f32; 2], u32> = VertexBuffers::new();
    FillTessellator::new().tessellate_path(
        &path,
        &FillOptions::tolerance(TOLERANCE),
        &mut BuffersBuilder::new(&mut buffers, |v: FillVertex| v.position().to_array()),
    )?;
    Ok((buffers.vertices, buffers.indices))
}

fn square_outline(width: f32, height: f32) -> (Vec<[f32; 2]>, Vec<u32>) {
    (
        vec![[0.0, 0.0], [width, 0.0], [width, height], [0.0, height]],
        vec![0, 1, 2, 0, 2, 3],
    )
}

fn build_mesh(points: &[[f32; 2]], indices: Vec<u32>, height: f32, gradient: Gradient) -> Mesh {
    let mut positions = Vec::with_capacity(points.len());
    let mut colors = Vec::with_capacity(points.len());
    let mut uvs = Vec::with_capacity(points.len());

    for &[x, y] in points {
        let t = if height > 0.0 { y / height } else { 0.0 };
        positions.push([x, y, 0.0]);
        colors.push(gradient.end.lerp(gradient.start, t).to_array());
        uvs.push([0.0, 1.0 - t]);
    }
    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}
