//! Camera and projection matrices.
//!
//! Graphics APIs disagree about the coordinate system of their clip space. A [`ClipSpace`] value
//! describes the convention to produce matrices for:
//!
//! - [`Handedness`] is the handedness of the *view space* the matrices operate on. In a
//!   right-handed view space the camera looks down `-Z`, in a left-handed one it looks down `+Z`.
//! - [`DepthRange`] is the range the near and far planes are mapped to in normalized device
//!   coordinates.
//!
//! The functions in this module are generic over the element type and storage qualifier like the
//! rest of the crate; they only combine kernel operations.

use crate::{storage::Qualifier, Float, Mat4, Matrix, Vector};

/// Handedness of the view-space coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handedness {
    /// The camera looks down `-Z` (with `+Y` up and `+X` to the right).
    Right,
    /// The camera looks down `+Z` (with `+Y` up and `+X` to the right).
    Left,
}

/// Range of the depth axis in normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthRange {
    /// Near plane at `-1`, far plane at `1`.
    NegativeOneToOne,
    /// Near plane at `0`, far plane at `1`.
    ZeroToOne,
}

/// A clip-space convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipSpace {
    pub handedness: Handedness,
    pub depth: DepthRange,
}

impl ClipSpace {
    /// OpenGL: right-handed, depth in `[-1, 1]`.
    pub const OPENGL: Self = Self {
        handedness: Handedness::Right,
        depth: DepthRange::NegativeOneToOne,
    };

    /// Vulkan and WebGPU: right-handed, depth in `[0, 1]`.
    ///
    /// Note that Vulkan's framebuffer Y axis points down; flipping it is left to the caller (for
    /// example by negating the viewport height).
    pub const VULKAN: Self = Self {
        handedness: Handedness::Right,
        depth: DepthRange::ZeroToOne,
    };

    /// Direct3D: left-handed, depth in `[0, 1]`.
    pub const DIRECTX: Self = Self {
        handedness: Handedness::Left,
        depth: DepthRange::ZeroToOne,
    };

    /// Sign of the view-space Z coordinate of points in front of the camera.
    fn forward<T: Float>(self) -> T {
        match self.handedness {
            Handedness::Right => -T::ONE,
            Handedness::Left => T::ONE,
        }
    }
}

fn two<T: Float>() -> T {
    T::ONE + T::ONE
}

/// Creates an orthographic projection matrix.
///
/// The box bounded by `left`/`right`, `bottom`/`top` and the `near`/`far` planes (distances along
/// the viewing direction) is mapped onto the clip volume of `clip`.
///
/// # Examples
///
/// ```
/// # use shade_math::{*, projection::*};
/// let m: Mat4f = ortho(-2.0, 2.0, -1.0, 1.0, 1.0, 11.0, ClipSpace::VULKAN);
/// assert_eq!(m * vec4(2.0, 1.0, -1.0, 1.0), vec4(1.0, 1.0, 0.0, 1.0));
/// assert_eq!(m * vec4(-2.0, -1.0, -11.0, 1.0), vec4(-1.0, -1.0, 1.0, 1.0));
/// ```
pub fn ortho<T: Float, Q: Qualifier>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
    clip: ClipSpace,
) -> Mat4<T, Q> {
    let mut m = Mat4::<T, Q>::IDENTITY;
    m[0][0] = two::<T>() / (right - left);
    m[1][1] = two::<T>() / (top - bottom);
    m[3][0] = -(right + left) / (right - left);
    m[3][1] = -(top + bottom) / (top - bottom);

    let forward = clip.forward::<T>();
    match clip.depth {
        DepthRange::ZeroToOne => {
            m[2][2] = -forward * (-T::ONE / (far - near));
            m[3][2] = -near / (far - near);
        }
        DepthRange::NegativeOneToOne => {
            m[2][2] = -forward * (-two::<T>() / (far - near));
            m[3][2] = -(far + near) / (far - near);
        }
    }
    m
}

/// Creates an orthographic projection for 2D drawing, without a depth mapping.
///
/// `z` is negated, all other coordinates are mapped like by [`ortho`].
pub fn ortho_2d<T: Float, Q: Qualifier>(left: T, right: T, bottom: T, top: T) -> Mat4<T, Q> {
    let mut m = Mat4::<T, Q>::IDENTITY;
    m[0][0] = two::<T>() / (right - left);
    m[1][1] = two::<T>() / (top - bottom);
    m[2][2] = -T::ONE;
    m[3][0] = -(right + left) / (right - left);
    m[3][1] = -(top + bottom) / (top - bottom);
    m
}

/// Writes the depth mapping shared by the finite perspective projections.
fn perspective_depth<T: Float, Q: Qualifier>(
    m: &mut Mat4<T, Q>,
    near: T,
    far: T,
    clip: ClipSpace,
) {
    let forward = clip.forward::<T>();
    match (clip.handedness, clip.depth) {
        (Handedness::Right, DepthRange::ZeroToOne) => m[2][2] = far / (near - far),
        (Handedness::Left, DepthRange::ZeroToOne) => m[2][2] = far / (far - near),
        (Handedness::Right, DepthRange::NegativeOneToOne) => {
            m[2][2] = -(far + near) / (far - near)
        }
        (Handedness::Left, DepthRange::NegativeOneToOne) => m[2][2] = (far + near) / (far - near),
    }
    m[2][3] = forward;
    m[3][2] = match clip.depth {
        DepthRange::ZeroToOne => -(far * near) / (far - near),
        DepthRange::NegativeOneToOne => -(two::<T>() * far * near) / (far - near),
    };
}

/// Creates a perspective projection matrix for the given view frustum.
///
/// The rectangle `left`/`right`, `bottom`/`top` lies on the near plane. `near` and `far` are the
/// (positive) distances of the clip planes along the viewing direction.
pub fn frustum<T: Float, Q: Qualifier>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
    clip: ClipSpace,
) -> Mat4<T, Q> {
    let mut m = Mat4::<T, Q>::ZERO;
    m[0][0] = two::<T>() * near / (right - left);
    m[1][1] = two::<T>() * near / (top - bottom);
    // The off-center terms are scaled by the clip-space `w`, which is `forward * z`.
    let forward = clip.forward::<T>();
    m[2][0] = -forward * (right + left) / (right - left);
    m[2][1] = -forward * (top + bottom) / (top - bottom);
    perspective_depth(&mut m, near, far, clip);
    m
}

/// Creates a symmetric perspective projection matrix.
///
/// `fov_y` is the vertical field of view in radians, `aspect` the ratio of width to height.
///
/// # Examples
///
/// ```
/// # use shade_math::{*, projection::*};
/// use std::f32::consts::FRAC_PI_2;
///
/// let m: Mat4f = perspective(FRAC_PI_2, 1.0, 0.1, 100.0, ClipSpace::VULKAN);
/// let near = m * vec4(0.0, 0.0, -0.1, 1.0);
/// let far = m * vec4(0.0, 0.0, -100.0, 1.0);
/// assert_approx_eq!(near.z() / near.w(), 0.0).abs(1e-6);
/// assert_approx_eq!(far.z() / far.w(), 1.0).abs(1e-6);
/// ```
pub fn perspective<T: Float, Q: Qualifier>(
    fov_y: T,
    aspect: T,
    near: T,
    far: T,
    clip: ClipSpace,
) -> Mat4<T, Q> {
    debug_assert!(aspect != T::ZERO, "aspect ratio must not be zero");

    let tan_half_fov_y = (fov_y / two::<T>()).tan();
    let mut m = Mat4::<T, Q>::ZERO;
    m[0][0] = T::ONE / (aspect * tan_half_fov_y);
    m[1][1] = T::ONE / tan_half_fov_y;
    perspective_depth(&mut m, near, far, clip);
    m
}

/// Creates a symmetric perspective projection matrix from a viewport size in pixels.
///
/// `fov` is the vertical field of view in radians.
pub fn perspective_fov<T: Float, Q: Qualifier>(
    fov: T,
    width: T,
    height: T,
    near: T,
    far: T,
    clip: ClipSpace,
) -> Mat4<T, Q> {
    debug_assert!(width > T::ZERO, "viewport width must be positive");
    debug_assert!(height > T::ZERO, "viewport height must be positive");
    debug_assert!(fov > T::ZERO, "field of view must be positive");

    let half = fov / two::<T>();
    let h = half.cos() / half.sin();
    let w = h * height / width;
    let mut m = Mat4::<T, Q>::ZERO;
    m[0][0] = w;
    m[1][1] = h;
    perspective_depth(&mut m, near, far, clip);
    m
}

/// Creates a perspective projection matrix without a far plane.
///
/// Points infinitely far away are mapped to the far end of the depth range.
pub fn infinite_perspective<T: Float, Q: Qualifier>(
    fov_y: T,
    aspect: T,
    near: T,
    clip: ClipSpace,
) -> Mat4<T, Q> {
    let range = (fov_y / two::<T>()).tan() * near;
    let left = -range * aspect;
    let right = range * aspect;
    let bottom = -range;
    let top = range;

    let forward = clip.forward::<T>();
    let mut m = Mat4::<T, Q>::ZERO;
    m[0][0] = two::<T>() * near / (right - left);
    m[1][1] = two::<T>() * near / (top - bottom);
    m[2][2] = forward;
    m[2][3] = forward;
    m[3][2] = match clip.depth {
        DepthRange::ZeroToOne => -near,
        DepthRange::NegativeOneToOne => -two::<T>() * near,
    };
    m
}

/// Creates a view matrix for a camera at `eye` looking at `center`.
///
/// `up` is the approximate up direction; it must not be parallel to the viewing direction.
///
/// # Examples
///
/// ```
/// # use shade_math::{*, projection::*};
/// let view = look_at(vec3(0.0, 0.0, 5.0), Vec3f::ZERO, Vec3f::Y, Handedness::Right);
/// // The target ends up in front of the camera, along -Z.
/// assert_eq!(view * vec4(0.0, 0.0, 0.0, 1.0), vec4(0.0, 0.0, -5.0, 1.0));
/// ```
pub fn look_at<T: Float, Q: Qualifier>(
    eye: Vector<T, 3, Q>,
    center: Vector<T, 3, Q>,
    up: Vector<T, 3, Q>,
    handedness: Handedness,
) -> Mat4<T, Q> {
    let f = (center - eye).normalize();
    let (s, u) = match handedness {
        Handedness::Right => {
            let s = f.cross(up).normalize();
            (s, s.cross(f))
        }
        Handedness::Left => {
            let s = up.cross(f).normalize();
            (s, f.cross(s))
        }
    };
    // View-space Z points backwards in a right-handed system.
    let z = match handedness {
        Handedness::Right => -f,
        Handedness::Left => f,
    };

    Matrix::from_rows([
        [s.x(), s.y(), s.z(), -s.dot(eye)],
        [u.x(), u.y(), u.z(), -u.dot(eye)],
        [z.x(), z.y(), z.z(), -z.dot(eye)],
        [T::ZERO, T::ZERO, T::ZERO, T::ONE],
    ])
}

/// Creates a picking matrix that restricts rendering to a small region of the viewport.
///
/// `center` and `size` describe the picking region in window coordinates, `viewport` is
/// `(x, y, width, height)`. A non-positive `size` yields the identity matrix.
pub fn pick_matrix<T: Float, Q: Qualifier>(
    center: Vector<T, 2, Q>,
    size: Vector<T, 2, Q>,
    viewport: Vector<T, 4, Q>,
) -> Mat4<T, Q> {
    if !(size.x() > T::ZERO && size.y() > T::ZERO) {
        return Mat4::<T, Q>::IDENTITY;
    }

    let offset = Vector::from_array([
        (viewport[2] - two::<T>() * (center.x() - viewport[0])) / size.x(),
        (viewport[3] - two::<T>() * (center.y() - viewport[1])) / size.y(),
        T::ZERO,
    ]);
    let scale = Vector::from_array([viewport[2] / size.x(), viewport[3] / size.y(), T::ONE]);
    Mat4::<T, Q>::IDENTITY.translate(offset).scale(scale)
}

/// Maps object coordinates to window coordinates.
///
/// `viewport` is `(x, y, width, height)`. The returned `z` is the window-space depth in the depth
/// range of `depth`.
pub fn project<T: Float, Q: Qualifier>(
    object: Vector<T, 3, Q>,
    model: Mat4<T, Q>,
    proj: Mat4<T, Q>,
    viewport: Vector<T, 4, Q>,
    depth: DepthRange,
) -> Vector<T, 3, Q> {
    let half = T::ONE / two::<T>();
    let clip = proj * (model * object.extend(T::ONE));
    let mut ndc = clip.truncate() / clip.w();
    ndc[0] = ndc[0] * half + half;
    ndc[1] = ndc[1] * half + half;
    if depth == DepthRange::NegativeOneToOne {
        ndc[2] = ndc[2] * half + half;
    }

    ndc[0] = ndc[0] * viewport[2] + viewport[0];
    ndc[1] = ndc[1] * viewport[3] + viewport[1];
    ndc
}

/// Maps window coordinates back to object coordinates.
///
/// This is the inverse of [`project`]. The result is meaningless if `proj * model` is singular.
pub fn unproject<T: Float, Q: Qualifier>(
    window: Vector<T, 3, Q>,
    model: Mat4<T, Q>,
    proj: Mat4<T, Q>,
    viewport: Vector<T, 4, Q>,
    depth: DepthRange,
) -> Vector<T, 3, Q> {
    let inverse = (proj * model).inverse();

    let mut ndc = window.extend(T::ONE);
    ndc[0] = (ndc[0] - viewport[0]) / viewport[2];
    ndc[1] = (ndc[1] - viewport[1]) / viewport[3];
    ndc[0] = ndc[0] * two::<T>() - T::ONE;
    ndc[1] = ndc[1] * two::<T>() - T::ONE;
    if depth == DepthRange::NegativeOneToOne {
        ndc[2] = ndc[2] * two::<T>() - T::ONE;
    }

    let object = inverse * ndc;
    object.truncate() / object.w()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_3;

    use crate::{assert_approx_eq, vec2, vec3, vec4, Mat4d, Mat4f, Vec3, Vec4};

    use super::*;

    const CONVENTIONS: [ClipSpace; 4] = [
        ClipSpace::OPENGL,
        ClipSpace::VULKAN,
        ClipSpace::DIRECTX,
        ClipSpace {
            handedness: Handedness::Left,
            depth: DepthRange::NegativeOneToOne,
        },
    ];

    /// View-space point at `distance` in front of the camera.
    fn ahead(clip: ClipSpace, x: f64, y: f64, distance: f64) -> Vec4<f64> {
        vec4(x, y, clip.forward::<f64>() * distance, 1.0)
    }

    fn ndc(m: Mat4d, p: Vec4<f64>) -> Vec3<f64> {
        let c = m * p;
        c.truncate() / c.w()
    }

    fn depth_bounds(clip: ClipSpace) -> (f64, f64) {
        match clip.depth {
            DepthRange::NegativeOneToOne => (-1.0, 1.0),
            DepthRange::ZeroToOne => (0.0, 1.0),
        }
    }

    #[test]
    fn ortho_corners() {
        for clip in CONVENTIONS {
            let m: Mat4d = ortho(-4.0, 2.0, -1.0, 3.0, 0.5, 20.0, clip);
            let (zn, zf) = depth_bounds(clip);
            let lower = ndc(m, ahead(clip, -4.0, -1.0, 0.5));
            let upper = ndc(m, ahead(clip, 2.0, 3.0, 20.0));
            assert_approx_eq!(lower, vec3(-1.0, -1.0, zn)).abs(1e-12);
            assert_approx_eq!(upper, vec3(1.0, 1.0, zf)).abs(1e-12);
        }

        let m: Mat4f = ortho_2d(0.0, 800.0, 600.0, 0.0);
        assert_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(-1.0, 1.0, 0.0, 1.0));
        assert_eq!(m * vec4(800.0, 600.0, 0.5, 1.0), vec4(1.0, -1.0, -0.5, 1.0));
    }

    #[test]
    fn frustum_corners() {
        for clip in CONVENTIONS {
            let (near, far) = (0.5, 50.0);
            let m: Mat4d = frustum(-0.2, 0.6, -0.1, 0.3, near, far, clip);
            let (zn, zf) = depth_bounds(clip);
            let lower = ndc(m, ahead(clip, -0.2, -0.1, near));
            let upper = ndc(m, ahead(clip, 0.6, 0.3, near));
            assert_approx_eq!(lower, vec3(-1.0, -1.0, zn)).abs(1e-12);
            assert_approx_eq!(upper, vec3(1.0, 1.0, zn)).abs(1e-12);
            // The far corners lie on the rays through the near corners.
            let k = far / near;
            assert_approx_eq!(ndc(m, ahead(clip, 0.6 * k, -0.1 * k, far)), vec3(1.0, -1.0, zf))
                .abs(1e-12);

            // Clip-space `w` is the distance in front of the camera.
            assert_approx_eq!((m * ahead(clip, 0.0, 0.0, 7.0)).w(), 7.0);
        }
    }

    #[test]
    fn perspective_depth_range() {
        for clip in CONVENTIONS {
            let m: Mat4d = perspective(FRAC_PI_3, 1.5, 0.1, 100.0, clip);
            let (zn, zf) = depth_bounds(clip);
            assert_approx_eq!(ndc(m, ahead(clip, 0.0, 0.0, 0.1)).z(), zn).abs(1e-12);
            assert_approx_eq!(ndc(m, ahead(clip, 0.0, 0.0, 100.0)).z(), zf).abs(1e-12);

            // Top edge of the field of view.
            let y = (FRAC_PI_3 / 2.0).tan() * 10.0;
            assert_approx_eq!(ndc(m, ahead(clip, 1.5 * y, y, 10.0)).xy(), vec2(1.0, 1.0))
                .abs(1e-12);

            let fov: Mat4d = perspective_fov(FRAC_PI_3, 1920.0, 1280.0, 0.1, 100.0, clip);
            assert_approx_eq!(fov, m).abs(1e-12);

            let inf: Mat4d = infinite_perspective(FRAC_PI_3, 1.5, 0.1, clip);
            assert_approx_eq!(ndc(inf, ahead(clip, 0.0, 0.0, 0.1)).z(), zn).abs(1e-12);
            assert_approx_eq!(ndc(inf, ahead(clip, 0.0, 0.0, 1e12)).z(), zf).abs(1e-9);
            assert_approx_eq!(ndc(inf, ahead(clip, 1.5 * y, y, 10.0)).xy(), vec2(1.0, 1.0))
                .abs(1e-12);
        }
    }

    #[test]
    fn look_at_handedness() {
        let eye = vec3(1.0, 2.0, 3.0);
        let target = vec3(4.0, 2.0, -1.0);
        for handedness in [Handedness::Right, Handedness::Left] {
            let clip = ClipSpace {
                handedness,
                depth: DepthRange::ZeroToOne,
            };
            let view: Mat4d = look_at(eye, target, vec3(0.0, 1.0, 0.0), handedness);
            assert_approx_eq!(view * eye.extend(1.0), vec4(0.0, 0.0, 0.0, 1.0)).abs(1e-12);
            assert_approx_eq!(view * target.extend(1.0), ahead(clip, 0.0, 0.0, 5.0)).abs(1e-12);
            // Up stays up.
            let above = (view * vec4(1.0, 3.0, 3.0, 1.0)).truncate();
            assert_approx_eq!(above.y(), 1.0).abs(1e-12);
            assert_approx_eq!(view.determinant(), 1.0).abs(1e-12);
        }
    }

    #[test]
    fn project_round_trip() {
        let viewport = vec4(10.0, 20.0, 640.0, 480.0);
        let model = Mat4d::from_translation(vec3(0.5, -0.25, 0.0));
        for clip in CONVENTIONS {
            let proj: Mat4d = perspective(FRAC_PI_3, 640.0 / 480.0, 0.5, 50.0, clip);
            let object = vec3(0.3, 0.2, clip.forward::<f64>() * 4.0);
            let window = project(object, model, proj, viewport, clip.depth);
            assert!(window.x() > 10.0 && window.x() < 650.0, "{window:?}");
            assert!(window.z() > 0.0 && window.z() < 1.0, "{window:?}");
            let back = unproject(window, model, proj, viewport, clip.depth);
            assert_approx_eq!(back, object).abs(1e-9);
        }

        // The viewport center maps to the view axis.
        let proj: Mat4d = perspective(FRAC_PI_3, 640.0 / 480.0, 0.5, 50.0, ClipSpace::OPENGL);
        let depth = DepthRange::NegativeOneToOne;
        let window = project(vec3(0.0, 0.0, -3.0), Mat4d::IDENTITY, proj, viewport, depth);
        assert_approx_eq!(window.xy(), vec2(330.0, 260.0)).abs(1e-9);
    }

    #[test]
    fn picking() {
        let viewport = vec4(0.0, 0.0, 100.0, 100.0);
        let pick: Mat4d = pick_matrix(vec2(75.0, 50.0), vec2(10.0, 10.0), viewport);
        // Window position (75, 50) corresponds to NDC (0.5, 0); the pick region is scaled to fill
        // the whole clip volume.
        assert_approx_eq!(pick * vec4(0.5, 0.0, 0.0, 1.0), vec4(0.0, 0.0, 0.0, 1.0)).abs(1e-12);
        assert_approx_eq!(pick * vec4(0.6, 0.1, 0.0, 1.0), vec4(1.0, 1.0, 0.0, 1.0)).abs(1e-12);

        let viewport = vec4(0.0, 0.0, 1.0, 1.0);
        let degenerate: Mat4f = pick_matrix(vec2(1.0, 1.0), vec2(0.0, 5.0), viewport);
        assert_eq!(degenerate, Mat4f::IDENTITY);
    }
}
