//! Standalone HTML viewer for sampled surfaces.
//!
//! Writes a self-contained page that loads Three.js from a CDN, builds a
//! shaded mesh from the sampled grid, and overlays the control points.
//! Orbit with mouse drag, zoom with the wheel.

use std::io::Write;
use std::path::Path;

use bez_core::{BezError, Result};
use bez_math::{Aabb3, Point3};

/// Export a sampled surface and its control grid as an interactive HTML viewer.
///
/// The grid is triangulated with two triangles per quad, in the same row-major
/// vertex order it was sampled in.
pub fn export_surface_html(
    grid: &[Vec<Point3>],
    control_points: &[Vec<Point3>],
    path: &Path,
) -> Result<()> {
    if grid.is_empty() || grid[0].is_empty() {
        return Err(BezError::InvalidInput("no surface samples to export".into()));
    }
    let rows = grid.len();
    let cols = grid[0].len();
    if grid.iter().any(|row| row.len() != cols) {
        return Err(BezError::InvalidInput(
            "sample grid is not rectangular".into(),
        ));
    }

    let controls: Vec<Point3> = control_points.iter().flatten().copied().collect();

    // The control hull bounds the mesh, so it also fixes the camera framing.
    let bounds = Aabb3::from_points(&controls)
        .ok_or_else(|| BezError::InvalidInput("no control points to export".into()))?;
    let center = bounds.center();
    let radius = bounds.extents().length().max(1.0);

    let mut file = std::fs::File::create(path)?;

    write!(
        file,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>BezEngine Surface Viewer</title>
    <style>
        body {{ margin: 0; overflow: hidden; background: #1a1a1a; }}
        #container {{ width: 100vw; height: 100vh; }}
        #info {{
            position: absolute; top: 10px; left: 10px;
            color: #ddd; font-family: sans-serif; font-size: 13px;
        }}
        #error {{
            position: absolute; top: 50%; left: 50%;
            transform: translate(-50%, -50%);
            background: rgba(200, 0, 0, 0.9); color: white;
            padding: 20px; border-radius: 5px; display: none;
        }}
    </style>
</head>
<body>
    <div id="container"></div>
    <div id="info">Bezier surface: {rows}x{cols} samples, {nc} control points</div>
    <div id="error">Failed to load Three.js from CDN.</div>

    <script src="https://cdnjs.cloudflare.com/ajax/libs/three.js/r128/three.min.js"></script>
    <script>
        if (typeof THREE === 'undefined') document.getElementById('error').style.display = 'block';
"#,
        rows = rows,
        cols = cols,
        nc = controls.len()
    )?;

    // Mesh vertices, row-major by u then v
    write!(file, "        const positions = [")?;
    for (i, p) in grid.iter().flatten().enumerate() {
        if i > 0 {
            write!(file, ",")?;
        }
        write!(file, "{:.4},{:.4},{:.4}", p.x as f32, p.y as f32, p.z as f32)?;
    }
    writeln!(file, "];")?;

    // Two triangles per grid quad
    write!(file, "        const indices = [")?;
    let mut first = true;
    for i in 0..rows.saturating_sub(1) {
        for j in 0..cols.saturating_sub(1) {
            let idx = |ii: usize, jj: usize| ii * cols + jj;
            for v in [
                idx(i, j),
                idx(i + 1, j),
                idx(i + 1, j + 1),
                idx(i, j),
                idx(i + 1, j + 1),
                idx(i, j + 1),
            ] {
                if !first {
                    write!(file, ",")?;
                }
                write!(file, "{}", v)?;
                first = false;
            }
        }
    }
    writeln!(file, "];")?;

    write!(file, "        const controls = [")?;
    for (i, p) in controls.iter().enumerate() {
        if i > 0 {
            write!(file, ",")?;
        }
        write!(file, "{:.4},{:.4},{:.4}", p.x as f32, p.y as f32, p.z as f32)?;
    }
    writeln!(file, "];")?;

    writeln!(
        file,
        "        const center = [{:.4}, {:.4}, {:.4}];",
        center.x, center.y, center.z
    )?;
    writeln!(file, "        const radius = {:.4};", radius)?;

    file.write_all(VIEWER_JS.as_bytes())?;
    Ok(())
}

const VIEWER_JS: &str = r#"
        function initScene() {
            const scene = new THREE.Scene();
            scene.background = new THREE.Color(0x1a1a1a);

            const camera = new THREE.PerspectiveCamera(
                60, window.innerWidth / window.innerHeight, 0.1, 10000);

            const renderer = new THREE.WebGLRenderer({ antialias: true });
            renderer.setSize(window.innerWidth, window.innerHeight);
            document.getElementById('container').appendChild(renderer.domElement);

            scene.add(new THREE.AmbientLight(0x404040, 2));
            const dirLight = new THREE.DirectionalLight(0xffffff, 1);
            dirLight.position.set(1, 1, 1);
            scene.add(dirLight);

            const geometry = new THREE.BufferGeometry();
            geometry.setAttribute('position', new THREE.Float32BufferAttribute(positions, 3));
            geometry.setIndex(indices);
            geometry.computeVertexNormals();
            const material = new THREE.MeshPhongMaterial({
                color: 0x4f83c3, shininess: 30, side: THREE.DoubleSide
            });
            scene.add(new THREE.Mesh(geometry, material));

            const pointGeometry = new THREE.BufferGeometry();
            pointGeometry.setAttribute('position', new THREE.Float32BufferAttribute(controls, 3));
            const pointMaterial = new THREE.PointsMaterial({ color: 0xff4040, size: radius * 0.03 });
            scene.add(new THREE.Points(pointGeometry, pointMaterial));

            const target = new THREE.Vector3(center[0], center[1], center[2]);
            let theta = Math.PI / 4;
            let phi = Math.PI / 4;
            let dist = radius * 2.0;

            function placeCamera() {
                camera.position.set(
                    target.x + dist * Math.sin(phi) * Math.cos(theta),
                    target.y + dist * Math.cos(phi),
                    target.z + dist * Math.sin(phi) * Math.sin(theta)
                );
                camera.lookAt(target);
            }
            placeCamera();

            let dragging = false;
            let last = { x: 0, y: 0 };
            renderer.domElement.addEventListener('mousedown', (e) => {
                dragging = true;
                last = { x: e.clientX, y: e.clientY };
            });
            renderer.domElement.addEventListener('mouseup', () => { dragging = false; });
            renderer.domElement.addEventListener('mousemove', (e) => {
                if (!dragging) return;
                theta -= (e.clientX - last.x) * 0.01;
                phi = Math.max(0.1, Math.min(Math.PI - 0.1, phi + (e.clientY - last.y) * 0.01));
                last = { x: e.clientX, y: e.clientY };
                placeCamera();
            });
            renderer.domElement.addEventListener('wheel', (e) => {
                e.preventDefault();
                dist = Math.max(radius * 0.2, dist + e.deltaY * 0.002 * radius);
                placeCamera();
            });
            window.addEventListener('resize', () => {
                camera.aspect = window.innerWidth / window.innerHeight;
                camera.updateProjectionMatrix();
                renderer.setSize(window.innerWidth, window.innerHeight);
            });

            function animate() {
                requestAnimationFrame(animate);
                renderer.render(scene, camera);
            }
            animate();
        }

        if (typeof THREE !== 'undefined') initScene();
    </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use bez_math::dvec3;

    fn quad_grid() -> Vec<Vec<Point3>> {
        vec![
            vec![dvec3(0.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0)],
            vec![dvec3(0.0, 1.0, 0.0), dvec3(1.0, 1.0, 1.0)],
        ]
    }

    #[test]
    fn test_html_export() {
        let grid = quad_grid();
        let html_path = std::env::temp_dir().join("bez_viewer_test.html");

        export_surface_html(&grid, &grid, &html_path).unwrap();

        let content = std::fs::read_to_string(&html_path).unwrap();
        assert!(content.contains("<!DOCTYPE html>"));
        assert!(content.contains("three.min.js"));
        assert!(content.contains("const positions = ["));
        // One quad, two triangles
        assert!(content.contains("const indices = [0,2,3,0,3,1];"));
        assert!(content.contains("2x2 samples, 4 control points"));

        let _ = std::fs::remove_file(html_path);
    }

    #[test]
    fn test_rejects_empty_grid() {
        let err = export_surface_html(&[], &quad_grid(), Path::new("unused.html")).unwrap_err();
        assert!(matches!(err, BezError::InvalidInput(_)));
    }

    #[test]
    fn test_rejects_ragged_grid() {
        let grid = vec![
            vec![dvec3(0.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0)],
            vec![dvec3(0.0, 1.0, 0.0)],
        ];
        let err = export_surface_html(&grid, &grid, Path::new("unused.html")).unwrap_err();
        assert!(matches!(err, BezError::InvalidInput(_)));
    }
}
