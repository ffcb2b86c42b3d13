use crate::angle::{arc_contains, forward_end, midpoint, normalize_angle};
use crate::chart::{
    Body, ChartData, ChartRadii, HouseCusps, Movement, PlanetSet, TickLengths, ZodiacSign,
};
use crate::layout::types::{
    AxisKind, AxisLayout, HouseCuspLayout, LayoutWarning, PlanetLayout, RingCircle, RingKind,
    SignLayout, TickEmphasis, ZodiacTick,
};
use crate::projection::PolarProjector;

/// Offset within a sign that gets the long tick.
const SIGN_MIDPOINT_OFFSET: u8 = 15;

/// All twelve cusps, normalized. Missing cusps after the first fall back to
/// equal houses measured from the ascendant.
pub fn resolve_cusps(
    houses: &HouseCusps,
    ascendant: f64,
    warnings: &mut Vec<LayoutWarning>,
) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        let number = i as u8 + 1;
        *cusp = match houses.get(number) {
            Some(degree) => normalize_angle(degree),
            None => {
                let degree = normalize_angle(ascendant + 30.0 * i as f64);
                log::warn!(
                    "House{} cusp missing; using equal-house cusp {:.2}",
                    number,
                    degree
                );
                warnings.push(LayoutWarning::SubstitutedCusp {
                    house: number,
                    degree,
                });
                degree
            }
        };
    }
    cusps
}

/// House (1-based) whose forward arc contains `longitude`.
pub fn house_for_longitude(longitude: f64, cusps: &[f64; 12]) -> u8 {
    for i in 0..12 {
        let next = cusps[(i + 1) % 12];
        if arc_contains(cusps[i], next, longitude) {
            return i as u8 + 1;
        }
    }
    // Only reachable with degenerate cusps (all equal)
    1
}

pub fn build_ring_circles(radii: &ChartRadii) -> Vec<RingCircle> {
    vec![
        RingCircle {
            kind: RingKind::OuterBoundary,
            radius: radii.outer_boundary,
        },
        RingCircle {
            kind: RingKind::House,
            radius: radii.house,
        },
        RingCircle {
            kind: RingKind::OuterZodiac,
            radius: radii.outer_zodiac,
        },
        RingCircle {
            kind: RingKind::Base,
            radius: radii.base,
        },
        RingCircle {
            kind: RingKind::HouseInner,
            radius: radii.house_inner,
        },
        RingCircle {
            kind: RingKind::Inner,
            radius: radii.inner,
        },
    ]
}

/// Build the twelve house entries in house order.
pub fn build_house_cusps(
    cusps: &[f64; 12],
    projector: &PolarProjector,
    radii: &ChartRadii,
) -> Vec<HouseCuspLayout> {
    (0..12)
        .map(|i| {
            let degree = cusps[i];
            let next_degree = cusps[(i + 1) % 12];
            let mid = midpoint(degree, forward_end(degree, next_degree));

            HouseCuspLayout {
                number: i as u8 + 1,
                start_degree: degree,
                end_degree: next_degree,
                midpoint_degree: mid,
                position: projector.project(degree, radii.base),
                line_start: projector.project(degree, radii.house_inner),
                line_end: projector.project(degree, radii.outer_boundary),
                label_position: projector.project(mid, radii.house_label),
                label_rotation: mid,
            }
        })
        .collect()
}

fn tick_emphasis(offset: u8) -> TickEmphasis {
    if offset == SIGN_MIDPOINT_OFFSET {
        TickEmphasis::Long
    } else if offset % 5 == 0 {
        TickEmphasis::Medium
    } else {
        TickEmphasis::Short
    }
}

/// 360 one-degree ticks, 30 per sign, drawn inward from the base circle.
pub fn build_zodiac_ticks(
    projector: &PolarProjector,
    radii: &ChartRadii,
    lengths: &TickLengths,
) -> Vec<ZodiacTick> {
    let mut ticks = Vec::with_capacity(360);

    for sign in ZodiacSign::ALL {
        for offset in 0..30u8 {
            let degree = sign.start_degree() + offset as f64;
            let emphasis = tick_emphasis(offset);
            let length = match emphasis {
                TickEmphasis::Long => lengths.long,
                TickEmphasis::Medium => lengths.medium,
                TickEmphasis::Short => lengths.short,
            };

            ticks.push(ZodiacTick {
                sign,
                offset,
                degree,
                start: projector.project(degree, radii.base - length),
                end: projector.project(degree, radii.base),
                length,
                emphasis,
            });
        }
    }

    ticks
}

/// Sign boundary lines and glyph anchors.
pub fn build_signs(projector: &PolarProjector, radii: &ChartRadii) -> Vec<SignLayout> {
    ZodiacSign::ALL
        .iter()
        .map(|sign| {
            let start_degree = sign.start_degree();
            let label_degree = start_degree + 15.0;
            SignLayout {
                sign: *sign,
                start_degree,
                boundary_start: projector.project(start_degree, radii.outer_zodiac),
                boundary_end: projector.project(start_degree, radii.base),
                label_degree,
                label_position: projector.project(label_degree, radii.zodiac_label),
            }
        })
        .collect()
}

pub fn build_axes(
    cusps: &[f64; 12],
    projector: &PolarProjector,
    radii: &ChartRadii,
) -> Vec<AxisLayout> {
    let label_radius = radii.axis + (radii.axis - radii.outer_boundary);

    AxisKind::ALL
        .iter()
        .map(|kind| {
            let degree = cusps[(kind.cusp() - 1) as usize];
            AxisLayout {
                kind: *kind,
                degree,
                line_start: projector.project(degree, radii.outer_boundary),
                line_end: projector.project(degree, radii.axis),
                label_position: projector.project(degree, label_radius),
            }
        })
        .collect()
}

/// Place every displayable body.
///
/// Bodies without a finite longitude are reported as malformed and skipped.
/// In traditional mode only the classical seven survive.
pub fn build_planets(
    chart: &ChartData,
    cusps: &[f64; 12],
    planet_set: PlanetSet,
    projector: &PolarProjector,
    radii: &ChartRadii,
    warnings: &mut Vec<LayoutWarning>,
) -> Vec<PlanetLayout> {
    let mut items = Vec::new();

    for (name, point) in &chart.points {
        let body = Body::from_name(name);
        if !planet_set.includes(&body) {
            log::debug!("Excluding {} from {:?} chart", name, planet_set);
            continue;
        }

        let Some(longitude) = point.usable_longitude() else {
            log::debug!("Skipping {}: no usable longitude", name);
            warnings.push(LayoutWarning::MalformedBody { name: name.clone() });
            continue;
        };

        let sign = point
            .sign
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| ZodiacSign::from_longitude(longitude).name().to_string());

        let house = point
            .house
            .filter(|h| (1..=12).contains(h))
            .or_else(|| Some(house_for_longitude(longitude, cusps)));

        let symbol = planet_set.symbol(&body, name);

        items.push(PlanetLayout {
            body,
            name: name.clone(),
            symbol,
            longitude,
            latitude: point.latitude.filter(|l| l.is_finite()),
            position: projector.project(longitude, radii.planet),
            label_position: projector.project(longitude, radii.planet_label),
            house,
            sign,
            movement: point.movement.unwrap_or(Movement::Unknown),
        });
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cusps() -> [f64; 12] {
        [
            100.0, 130.0, 160.0, 190.0, 220.0, 250.0, 280.0, 310.0, 340.0, 10.0, 40.0, 70.0,
        ]
    }

    #[test]
    fn test_house_for_longitude_wraps() {
        let cusps = sample_cusps();
        assert_eq!(house_for_longitude(100.0, &cusps), 1);
        assert_eq!(house_for_longitude(129.9, &cusps), 1);
        assert_eq!(house_for_longitude(350.0, &cusps), 9);
        assert_eq!(house_for_longitude(5.0, &cusps), 9);
        assert_eq!(house_for_longitude(99.0, &cusps), 12);
    }

    #[test]
    fn test_tick_emphasis() {
        assert_eq!(tick_emphasis(15), TickEmphasis::Long);
        assert_eq!(tick_emphasis(0), TickEmphasis::Medium);
        assert_eq!(tick_emphasis(25), TickEmphasis::Medium);
        assert_eq!(tick_emphasis(7), TickEmphasis::Short);
    }

    #[test]
    fn test_resolve_cusps_substitutes_missing() {
        let mut houses = HouseCusps::default();
        houses.set(1, 100.0);
        houses.set(2, 125.0);
        let mut warnings = Vec::new();
        let cusps = resolve_cusps(&houses, 100.0, &mut warnings);
        assert_eq!(cusps[1], 125.0);
        assert_eq!(cusps[2], 160.0);
        assert_eq!(cusps[9], 10.0);
        assert_eq!(warnings.len(), 10);
    }
}
