use crate::chart::{AspectEntry, Body};
use crate::layout::types::{AspectLine, LayoutWarning, PlanetLayout};

/// Find a placed body by the name an aspect uses.
///
/// Exact key match first; known bodies also match across spelling variants
/// (`North Node` vs `north_node`).
fn find_planet<'a>(planets: &'a [PlanetLayout], name: &str) -> Option<&'a PlanetLayout> {
    if let Some(planet) = planets.iter().find(|p| p.name == name) {
        return Some(planet);
    }
    match Body::from_name(name) {
        Body::Other(_) => None,
        body => planets.iter().find(|p| p.body == body),
    }
}

/// Resolve aspect entries against placed bodies.
///
/// Entries naming a body that was not placed are dropped and reported, never
/// treated as errors.
pub fn build_aspect_lines(
    aspects: &[AspectEntry],
    planets: &[PlanetLayout],
    warnings: &mut Vec<LayoutWarning>,
) -> Vec<AspectLine> {
    let mut lines = Vec::with_capacity(aspects.len());

    for aspect in aspects {
        let from = find_planet(planets, &aspect.planet1);
        let to = find_planet(planets, &aspect.planet2);

        let (from, to) = match (from, to) {
            (Some(from), Some(to)) => (from, to),
            (from, _) => {
                let missing = if from.is_none() {
                    &aspect.planet1
                } else {
                    &aspect.planet2
                };
                log::debug!(
                    "Dropping {} {}-{}: {} not on chart",
                    aspect.aspect_type,
                    aspect.planet1,
                    aspect.planet2,
                    missing
                );
                warnings.push(LayoutWarning::UnresolvedAspectReference {
                    planet1: aspect.planet1.clone(),
                    planet2: aspect.planet2.clone(),
                    missing: missing.clone(),
                });
                continue;
            }
        };

        lines.push(AspectLine {
            planet1: aspect.planet1.clone(),
            planet2: aspect.planet2.clone(),
            aspect_type: aspect.aspect_type,
            from: from.position,
            to: to.position,
            control: from.position.lerp_mid(&to.position),
            angle: aspect.angle,
            orb: aspect.orb,
            applying: aspect.applying,
        });
    }

    lines
}
