use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use anyhow::{Context, Result, anyhow, bail, ensure};
use log::{debug, info, warn};

use crate::color::Color;
use crate::mesh::Mesh;
use crate::point2d::Point2Df;
use crate::point3d::Point3Df;
use crate::texture::Texture;

/// One polygon as written in the file, indices already zero-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub v_indices: Vec<usize>,
    pub vt_indices: Vec<Option<usize>>,
    /// Range-checked on load but not used for shading, which takes the flat
    /// face normal from the positions.
    pub vn_indices: Vec<Option<usize>>,
}

#[derive(Debug, Default)]
pub struct ObjData {
    pub positions: Vec<Point3Df>,
    pub texcoords: Vec<Point2Df>,
    /// Kept so `vn_indices` can be validated; `Model` does not carry them.
    pub normals: Vec<Point3Df>,
    pub faces: Vec<Face>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FaceCorner {
    pub vertex: usize,
    pub texcoord: Option<usize>,
}

pub fn parse_obj<R: BufRead>(reader: R) -> Result<ObjData> {
    let mut data = ObjData::default();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        parse_line(&line, &mut data).with_context(|| format!("line {}", line_no + 1))?;
    }
    validate(&data)?;
    Ok(data)
}

fn parse_line(line: &str, data: &mut ObjData) -> Result<()> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() || tokens[0].starts_with('#') {
        return Ok(());
    }

    match tokens[0] {
        "v" => {
            let [x, y, z] = parse_floats::<3>(&tokens[1..])?;
            data.positions.push(Point3Df { x, y, z })
        }
        "vt" => {
            // optional third (w) component is ignored
            let [u, v] = parse_floats::<2>(&tokens[1..])?;
            data.texcoords.push(Point2Df { x: u, y: v })
        }
        "vn" => {
            let [x, y, z] = parse_floats::<3>(&tokens[1..])?;
            data.normals.push(Point3Df { x, y, z })
        }
        "f" => {
            ensure!(tokens.len() >= 4, "face needs at least 3 corners, found {}", tokens.len() - 1);
            let mut face = Face { v_indices: Vec::new(), vt_indices: Vec::new(), vn_indices: Vec::new() };
            for part in &tokens[1..] {
                let (v, vt, vn) = parse_face_vertex(part, data)?;
                face.v_indices.push(v);
                face.vt_indices.push(vt);
                face.vn_indices.push(vn);
            }
            data.faces.push(face)
        }
        _ => {}
    }
    Ok(())
}

fn parse_floats<const N: usize>(tokens: &[&str]) -> Result<[f32; N]> {
    ensure!(tokens.len() >= N, "expected {N} numbers, found {}", tokens.len());
    let mut out = [0.0; N];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = token.parse().with_context(|| format!("invalid number {token:?}"))?;
    }
    Ok(out)
}

/// OBJ indices are 1-based; negative ones count back from the latest element.
fn resolve_index(token: &str, count: usize) -> Result<usize> {
    let raw: i64 = token.parse().with_context(|| format!("invalid index {token:?}"))?;
    match raw {
        0 => bail!("index 0 is not valid, OBJ indices start at 1"),
        r if r > 0 => Ok((r - 1) as usize),
        r => {
            let back = r.unsigned_abs() as usize;
            ensure!(back <= count, "relative index {r} points before the first element");
            Ok(count - back)
        }
    }
}

fn parse_face_vertex(s: &str, data: &ObjData) -> Result<(usize, Option<usize>, Option<usize>)> {
    let parts: Vec<&str> = s.split('/').collect();
    ensure!(parts.len() <= 3, "malformed face corner {s:?}");
    let v = match parts[0] {
        "" => return Err(anyhow!("missing vertex index in {s:?}")),
        token => resolve_index(token, data.positions.len())?,
    };
    let vt = match parts.get(1) {
        Some(&"") | None => None,
        Some(token) => Some(resolve_index(token, data.texcoords.len())?),
    };
    let vn = match parts.get(2) {
        Some(&"") | None => None,
        Some(token) => Some(resolve_index(token, data.normals.len())?),
    };
    Ok((v, vt, vn))
}

fn validate(data: &ObjData) -> Result<()> {
    for (i, face) in data.faces.iter().enumerate() {
        for &v in &face.v_indices {
            ensure!(v < data.positions.len(), "face {} uses vertex {} but only {} exist", i + 1, v + 1, data.positions.len());
        }
        for &vt in face.vt_indices.iter().flatten() {
            ensure!(vt < data.texcoords.len(), "face {} uses texture coordinate {} but only {} exist", i + 1, vt + 1, data.texcoords.len());
        }
        for &vn in face.vn_indices.iter().flatten() {
            ensure!(vn < data.normals.len(), "face {} uses normal {} but only {} exist", i + 1, vn + 1, data.normals.len());
        }
    }
    Ok(())
}

/// Splits every polygon into a fan of triangles around its first corner.
pub fn fan_triangulate_faces(faces: &[Face]) -> Vec<[FaceCorner; 3]> {
    let mut triangles: Vec<[FaceCorner; 3]> = Vec::new();

    for face in faces {
        let corner = |k: usize| FaceCorner { vertex: face.v_indices[k], texcoord: face.vt_indices[k] };
        for i in 1..face.v_indices.len() - 1 {
            triangles.push([corner(0), corner(i), corner(i + 1)]);
        }
    }

    triangles
}

/// Texture path that accompanies a model: `head.obj` -> `head_diffuse.tga`.
pub fn diffuse_path(model_path: &Path) -> PathBuf {
    let stem = model_path.file_stem().and_then(|s| s.to_str()).unwrap_or("model");
    model_path.with_file_name(format!("{stem}_diffuse.tga"))
}

/// Triangulated OBJ mesh plus its diffuse texture.
pub struct Model {
    vertices: Vec<Point3Df>,
    texcoords: Vec<Point2Df>,
    faces: Vec<[FaceCorner; 3]>,
    diffuse: Texture,
}

impl Model {
    /// Loads `path` and the diffuse texture next to it. A missing texture is not
    /// fatal: the model is shaded with plain white instead.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("opening model {}", path.display()))?;
        let obj = parse_obj(BufReader::new(file)).with_context(|| format!("parsing model {}", path.display()))?;

        let texture_path = diffuse_path(path);
        let diffuse = match Texture::load(&texture_path) {
            Ok(texture) if !texture.is_empty() => {
                debug!("loaded texture {} ({}x{})", texture_path.display(), texture.width(), texture.height());
                texture
            }
            Ok(_) => {
                warn!("texture {} is empty, using white", texture_path.display());
                Texture::solid(Color::WHITE)
            }
            Err(e) => {
                warn!("texture {} not loaded ({e}), using white", texture_path.display());
                Texture::solid(Color::WHITE)
            }
        };

        let model = Model::from_obj(obj, diffuse);
        info!("loaded {}: {} vertices, {} triangles", path.display(), model.vertices.len(), model.faces.len());
        Ok(model)
    }

    pub fn from_obj(obj: ObjData, diffuse: Texture) -> Self {
        let polygons = obj.faces.iter().filter(|f| f.v_indices.len() > 3).count();
        if polygons > 0 {
            debug!("fan-triangulating {polygons} polygons");
        }
        Model {
            faces: fan_triangulate_faces(&obj.faces),
            vertices: obj.positions,
            texcoords: obj.texcoords,
            diffuse,
        }
    }
}

impl Mesh for Model {
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn face(&self, i: usize) -> [usize; 3] {
        self.faces[i].map(|corner| corner.vertex)
    }

    fn vertex(&self, i: usize) -> Point3Df {
        self.vertices[i]
    }

    fn texture_coord(&self, face: usize, corner: usize) -> Point2Df {
        match self.faces[face][corner].texcoord {
            Some(vt) => {
                let uv = self.texcoords[vt];
                Point2Df::new(uv.x * self.diffuse.width() as f32, uv.y * self.diffuse.height() as f32)
            }
            None => Point2Df::default(),
        }
    }

    fn sample_diffuse(&self, texel: Point2Df) -> Color {
        self.diffuse.sample_texel(texel)
    }
}
