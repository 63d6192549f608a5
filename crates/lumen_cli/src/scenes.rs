//! Procedurally built demo scenes.

use clap::ValueEnum;
use lumen_renderer::{Camera, Color, Material, Scene, Sphere, Triangle, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoScene {
    /// A red glowing sphere next to a large white light
    TwoSpheres,
    /// Closed box with colored walls, a ceiling light and two spheres
    Cornell,
}

impl DemoScene {
    /// Build the scene and a camera framing it.
    pub fn build(self, width: u32, height: u32, fov: Option<f32>) -> (Scene, Camera) {
        let (scene, camera) = match self {
            DemoScene::TwoSpheres => two_spheres(),
            DemoScene::Cornell => cornell(),
        };
        let camera = camera.with_resolution(width, height);
        let camera = match fov {
            Some(fov) => camera.with_fov(fov),
            None => camera,
        };
        (scene, camera)
    }
}

pub fn two_spheres() -> (Scene, Camera) {
    let scene = Scene::new()
        .with(Sphere::new(
            Vec3::new(-0.5, 0.0, 5.0),
            0.4,
            Material::from_rgb8([255, 0, 0], [255, 0, 0], 0.5),
        ))
        .with(Sphere::new(
            Vec3::new(0.5, 0.0, 4.0),
            1.0,
            Material::from_rgb8([0, 0, 0], [255, 255, 255], 1.0),
        ));

    let camera = Camera::new()
        .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, 4.5), Vec3::Y)
        .with_fov(40.0);

    (scene, camera)
}

/// Two triangles covering the quad `a b c d`; the normal follows `(b - a) x (c - a)`.
fn quad(scene: &mut Scene, [a, b, c, d]: [Vec3; 4], material: Material) {
    scene.add(Triangle::new(a, b, c, material));
    scene.add(Triangle::new(a, c, d, material));
}

pub fn cornell() -> (Scene, Camera) {
    let white = Material::diffuse(Color::splat(0.75));
    let red = Material::diffuse(Color::new(0.75, 0.15, 0.15));
    let green = Material::diffuse(Color::new(0.15, 0.75, 0.15));
    let light = Material::light(Color::ONE, 4.0);

    let v = Vec3::new;
    let mut scene = Scene::new();

    // Box corners: a-d on the near face (z = -1), e-h on the back face (z = 1)
    let (lo, hi) = (-1.0, 1.0);
    let [a, b, c, d] = [v(lo, lo, lo), v(hi, lo, lo), v(hi, hi, lo), v(lo, hi, lo)];
    let [e, f, g, h] = [v(lo, lo, hi), v(hi, lo, hi), v(hi, hi, hi), v(lo, hi, hi)];

    // Every wall is wound so its normal faces into the box
    quad(&mut scene, [a, e, f, b], white);
    quad(&mut scene, [d, c, g, h], white);
    quad(&mut scene, [e, h, g, f], white);
    quad(&mut scene, [a, d, h, e], green);
    quad(&mut scene, [b, f, g, c], red);

    let y = 0.99;
    let lamp = [v(-0.3, y, -0.3), v(0.3, y, -0.3), v(0.3, y, 0.3), v(-0.3, y, 0.3)];
    quad(&mut scene, lamp, light);

    scene.add(Sphere::new(v(0.45, -0.6, 0.3), 0.4, Material::mirror(Color::splat(0.9))));
    scene.add(Sphere::new(
        v(-0.45, -0.65, -0.2),
        0.35,
        Material::diffuse(Color::splat(0.8)).with_smoothness(0.7),
    ));

    let camera = Camera::new()
        .with_position(v(0.0, 0.0, -3.4), Vec3::ZERO, Vec3::Y)
        .with_fov(40.0);

    (scene, camera)
}
