//! Built-in scene rendered when no description file is given.

use prism_core::description::{
    CameraDescription, ImageDescription, LightDescription, MeshDescription, SphereDescription,
};
use prism_core::{Material, Rgb, SceneDescription, SceneResult};

const FLOOR_Y: f32 = 150.0;
const BACK_Z: f32 = 800.0;
const HALF_WIDTH: f32 = 400.0;

/// Quad from four corners, wound so the face normal follows `a -> b -> c`.
fn quad(corners: [[f32; 3]; 4], material: Material) -> MeshDescription {
    MeshDescription {
        material,
        positions: corners.to_vec(),
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

/// Floor and back wall, three spheres (matte, mirror, glass) and two lights.
///
/// Screen Y grows downward, so the floor sits at positive Y and faces -Y.
pub fn scene() -> SceneResult<SceneDescription> {
    let floor = quad(
        [
            [-HALF_WIDTH, FLOOR_Y, 0.0],
            [HALF_WIDTH, FLOOR_Y, 0.0],
            [HALF_WIDTH, FLOOR_Y, BACK_Z],
            [-HALF_WIDTH, FLOOR_Y, BACK_Z],
        ],
        Material::matte(Rgb::new(180, 180, 170)).with_reflectivity(0.1),
    );
    let back_wall = quad(
        [
            [-HALF_WIDTH, -HALF_WIDTH, BACK_Z],
            [-HALF_WIDTH, FLOOR_Y, BACK_Z],
            [HALF_WIDTH, FLOOR_Y, BACK_Z],
            [HALF_WIDTH, -HALF_WIDTH, BACK_Z],
        ],
        Material::matte(Rgb::new(60, 90, 160)),
    );

    let radius = 80.0;
    let sphere_y = FLOOR_Y - radius;
    let spheres = vec![
        SphereDescription {
            center: [-200.0, sphere_y, 450.0],
            radius,
            material: Material::matte(Rgb::new(200, 60, 40)).with_specular(0.3, 30.0),
        },
        SphereDescription {
            center: [0.0, sphere_y, 550.0],
            radius,
            material: Material::mirror(),
        },
        SphereDescription {
            center: [200.0, sphere_y, 400.0],
            radius,
            material: Material::glass(1.5)?,
        },
    ];

    let lights = vec![
        LightDescription {
            position: [-250.0, -300.0, 100.0],
            intensity: 0.8,
            color: Rgb::WHITE,
        },
        LightDescription {
            position: [300.0, -200.0, 200.0],
            intensity: 0.5,
            color: Rgb::new(255, 230, 200),
        },
    ];

    Ok(SceneDescription {
        image: ImageDescription {
            width: 640,
            height: 480,
        },
        camera: CameraDescription {
            eye: [0.0, 0.0, -600.0],
            upper_left: None,
            bottom_right: None,
            diffuse_sampling: false,
            max_depth: Some(4),
        },
        meshes: vec![floor, back_wall],
        spheres,
        lights,
    })
}
