use bevy::prelude::*;
use bevy_camera::visibility::RenderLayers;

use crate::engine::PagerDirection;

/// The four stacked views a chart is drawn through
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartLayer {
    /// Full window: axis, grid, pager, placeholder
    Chrome,
    /// Clipped to the canvas rect, scrolls with the chart
    Canvas,
    /// Clipped to the label row, root shifted by the negated offset
    Labels,
    /// Full window, on top of everything
    Overlay,
}

impl ChartLayer {
    pub const ALL: [ChartLayer; 4] = [
        ChartLayer::Chrome,
        ChartLayer::Canvas,
        ChartLayer::Labels,
        ChartLayer::Overlay,
    ];

    pub fn render_layers(self) -> RenderLayers {
        RenderLayers::layer(self.order() as usize)
    }

    pub fn order(self) -> isize {
        match self {
            ChartLayer::Chrome => 0,
            ChartLayer::Canvas => 1,
            ChartLayer::Labels => 2,
            ChartLayer::Overlay => 3,
        }
    }
}

#[derive(Component)]
pub struct ChartCamera(pub ChartLayer);

/// Parent of everything drawn on one layer; despawned on rebuild
#[derive(Component)]
pub struct SceneRoot(pub ChartLayer);

#[derive(Component)]
pub struct BarMesh {
    pub index: usize,
    /// Height the mesh was last built for
    pub drawn_height: f32,
}

#[derive(Component)]
pub struct PagerButton(pub PagerDirection);

#[derive(Component)]
pub struct TooltipRoot;

#[derive(Component)]
pub struct TooltipPanel;

#[derive(Component)]
pub struct TooltipTitle;

#[derive(Component)]
pub struct TooltipValue;
