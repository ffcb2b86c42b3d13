use crate::chart::{ChartData, ChartGeometryConfig};
use crate::layout::aspects::build_aspect_lines;
use crate::layout::rings::{
    build_axes, build_house_cusps, build_planets, build_ring_circles, build_signs,
    build_zodiac_ticks, resolve_cusps,
};
use crate::layout::types::{LayoutError, LayoutModel};
use crate::projection::PolarProjector;

/// Stateless chart layout engine.
///
/// Holds only geometry configuration; every call to [`compute`] builds a
/// fresh [`LayoutModel`] from its input.
///
/// [`compute`]: ChartLayoutEngine::compute
#[derive(Debug, Clone, Default)]
pub struct ChartLayoutEngine {
    config: ChartGeometryConfig,
}

impl ChartLayoutEngine {
    pub fn new(config: ChartGeometryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartGeometryConfig {
        &self.config
    }

    /// Lay out a complete chart.
    ///
    /// Fails only when the ascendant (House1) is missing; everything else that
    /// is missing or malformed is skipped and listed in `warnings`.
    pub fn compute(&self, chart: &ChartData) -> Result<LayoutModel, LayoutError> {
        let ascendant = chart
            .houses
            .ascendant()
            .ok_or(LayoutError::MissingAscendant)?;

        let radii = self.config.radii();
        let projector = PolarProjector::for_ascendant(self.config.center, ascendant);
        let mut warnings = Vec::new();

        let cusps = resolve_cusps(&chart.houses, ascendant, &mut warnings);
        let house_cusps = build_house_cusps(&cusps, &projector, &radii);
        let signs = build_signs(&projector, &radii);
        let zodiac_ticks = build_zodiac_ticks(&projector, &radii, &self.config.ticks);
        let axes = build_axes(&cusps, &projector, &radii);
        let planets = build_planets(
            chart,
            &cusps,
            self.config.planet_set,
            &projector,
            &radii,
            &mut warnings,
        );
        let aspect_lines = build_aspect_lines(&chart.aspects, &planets, &mut warnings);

        log::debug!(
            "Chart layout: rotation {:.2}, {} planets, {} aspects, {} warnings",
            projector.rotation(),
            planets.len(),
            aspect_lines.len(),
            warnings.len()
        );

        Ok(LayoutModel {
            rotation: projector.rotation(),
            center: projector.center(),
            radii,
            rings: build_ring_circles(&radii),
            house_cusps,
            signs,
            zodiac_ticks,
            axes,
            planets,
            aspect_lines,
            warnings,
        })
    }
}

/// Lay out `chart` with `config`. See [`ChartLayoutEngine::compute`].
pub fn compute_layout(
    chart: &ChartData,
    config: &ChartGeometryConfig,
) -> Result<LayoutModel, LayoutError> {
    ChartLayoutEngine::new(*config).compute(chart)
}
