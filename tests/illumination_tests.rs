use approx::assert_relative_eq;
use nalgebra::{Vector2, Vector3};
use vimlogo::color::{HasColor, Rgb8, rgb_to_intensity};
use vimlogo::errors::LogoError;
use vimlogo::illumination::{
    LightSource, Material, calibrate_material_color, illuminate, illuminate_rgb, light_ring, shade, shade_with,
};

fn white_overhead() -> LightSource {
    LightSource::new(Vector3::new(1.0, 1.0, 1.0), Vector3::z()).unwrap()
}

#[test]
fn material_weights_are_normalized() {
    let material = Material::new(Vector3::new(0.5, 0.5, 0.5), 1.0, 3.0, 0.0).unwrap();
    assert_relative_eq!(material.ambient(), 0.25);
    assert_relative_eq!(material.diffuse(), 0.75);
    assert_relative_eq!(material.specular(), 0.0);
    assert_relative_eq!(material.shine(), 1.0);
}

#[test]
fn bad_weights_are_rejected() {
    let gray = Vector3::new(0.5, 0.5, 0.5);
    assert!(matches!(Material::new(gray, -1.0, 1.0, 0.0), Err(LogoError::DegenerateInput(_))));
    assert!(matches!(Material::new(gray, 0.0, 0.0, 0.0), Err(LogoError::DegenerateInput(_))));
    assert!(LightSource::new(gray, Vector3::zeros()).is_err());
}

#[test]
fn head_on_white_light_returns_the_material_color() {
    let material = Material::from_hex("#336699", 0.2, 0.8, 0.0).unwrap();
    let lit = illuminate(&Vector3::z(), &material, &[white_overhead()]).unwrap();
    assert_eq!(lit, "#336699");
}

#[test]
fn facing_away_leaves_only_ambient() {
    let material = Material::new(Vector3::new(1.0, 1.0, 1.0), 0.2, 0.8, 0.0).unwrap();
    let color = shade(&-Vector3::z(), &material, &white_overhead()).unwrap();
    assert_relative_eq!(color, Vector3::new(0.2, 0.2, 0.2), epsilon = 1e-12);
}

#[test]
fn shading_a_candidate_color_leaves_the_material_alone() {
    let material = Material::from_hex("#336699", 0.2, 0.6, 0.2).unwrap();
    let light = LightSource::from_hex("#ffffff", Vector3::new(-1.0, -1.0, 2.0)).unwrap();
    let normal = Vector3::new(0.2, -0.4, 1.0);

    assert_relative_eq!(
        shade_with(&normal, &material, &material.color(), &light).unwrap(),
        shade(&normal, &material, &light).unwrap(),
        epsilon = 1e-12
    );

    let candidate = Vector3::new(0.9, 0.1, 0.4);
    assert_relative_eq!(
        shade_with(&normal, &material, &candidate, &light).unwrap(),
        shade(&normal, &material.with_color(candidate), &light).unwrap(),
        epsilon = 1e-12
    );
    assert_eq!(material.hex_color(), "#336699");
}

#[test]
fn color_setters_agree_across_formats() {
    let mut light = LightSource::from_hex("#000000", Vector3::z()).unwrap();
    light.set_hex_color("#009933").unwrap();
    assert_eq!(light.rgb_color(), Rgb8::new(0x00, 0x99, 0x33));

    let hsl = light.hsl_color();
    light.set_rgb_color(Rgb8::WHITE);
    assert_eq!(light.hex_color(), "#ffffff");
    light.set_hsl_color(&hsl);
    assert_eq!(light.hex_color(), "#009933");

    let mut material = Material::new(Vector3::zeros(), 0.2, 0.8, 0.0).unwrap();
    material.set_hsl_color(&Vector3::new(120.0, 100.0, 50.0));
    assert_eq!(material.rgb_color(), Rgb8::new(0, 255, 0));
    assert!(material.set_hex_color("#nothex").is_err());
    assert_eq!(material.rgb_color(), Rgb8::new(0, 255, 0));
}

#[test]
fn output_is_clamped_hex() {
    let material = Material::new(Vector3::new(2.0, -1.0, 0.5), 0.1, 0.5, 0.4).unwrap();
    let lights = vec![white_overhead(); 4];
    for normal in [Vector3::z(), Vector3::new(1.0, 2.0, 3.0), Vector3::new(-1.0, 0.0, 0.1)] {
        let hex = illuminate(&normal, &material, &lights).unwrap();
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
        assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
fn no_lights_is_an_error() {
    let material = Material::new(Vector3::new(0.5, 0.5, 0.5), 0.2, 0.8, 0.0).unwrap();
    assert!(illuminate(&Vector3::z(), &material, &[]).is_err());
}

#[test]
fn calibration_lands_within_one_step_of_goal() {
    let light = LightSource::new(Vector3::new(1.0, 1.0, 1.0), Vector3::new(1.0, 0.0, 1.0)).unwrap();
    let material = Material::new(Vector3::zeros(), 0.2, 0.8, 0.0).unwrap();
    let goal = Rgb8::new(0x80, 0x40, 0x10);

    let calibrated = calibrate_material_color(&Vector3::z(), &material, &[light.clone()], goal).unwrap();
    let got = illuminate_rgb(&Vector3::z(), &calibrated, &[light]).unwrap();
    for (g, want) in got.channels().into_iter().zip(goal.channels()) {
        assert!(g >= want && g <= want + 1, "channel {g} vs goal {want}");
    }
    // only the color changes
    assert_relative_eq!(calibrated.ambient(), material.ambient());
    assert_relative_eq!(calibrated.diffuse(), material.diffuse());
}

#[test]
fn calibration_with_unit_gain_is_exact() {
    let material = Material::new(Vector3::zeros(), 0.2, 0.8, 0.0).unwrap();
    let goal = Rgb8::new(0x00, 0x99, 0x33);
    let calibrated = calibrate_material_color(&Vector3::z(), &material, &[white_overhead()], goal).unwrap();
    assert_relative_eq!(calibrated.color(), rgb_to_intensity(&goal), epsilon = 1e-12);
}

#[test]
fn unreachable_goal_reports_both_bounds() {
    let light = LightSource::new(Vector3::new(0.5, 0.5, 0.5), Vector3::z()).unwrap();
    let material = Material::new(Vector3::zeros(), 0.0, 1.0, 0.0).unwrap();
    let err = calibrate_material_color(&Vector3::z(), &material, &[light], Rgb8::WHITE).unwrap_err();
    match err {
        LogoError::IlluminationRange { low, high, goal } => {
            assert_eq!(low, Rgb8::BLACK);
            assert_eq!(high, Rgb8::new(128, 128, 128));
            assert_eq!(goal, Rgb8::WHITE);
        },
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn light_ring_splits_the_color_and_favors_the_dominant_side() {
    let white = Vector3::new(1.0, 1.0, 1.0);
    let ring = light_ring(&white, &Vector2::new(-1.0, -1.0), 1.0, 8).unwrap();
    assert_eq!(ring.len(), 8);

    let total = ring.iter().fold(Vector3::zeros(), |acc, l| acc + l.color());
    assert_relative_eq!(total, white, epsilon = 1e-12);

    let first = &ring[0];
    assert_relative_eq!(*first.direction(), Vector3::new(-0.5, -0.5, 0.5_f64.sqrt()), epsilon = 1e-12);
    assert!(ring[1..].iter().all(|l| l.color().x < first.color().x));
    // the light opposite the dominant direction has zero weight
    assert_relative_eq!(ring[4].color().x, 0.0, epsilon = 1e-12);
}

#[test]
fn light_ring_needs_lights_and_a_direction() {
    let white = Vector3::new(1.0, 1.0, 1.0);
    assert!(light_ring(&white, &Vector2::new(1.0, 0.0), 1.0, 0).is_err());
    assert!(light_ring(&white, &Vector2::zeros(), 1.0, 8).is_err());
}
