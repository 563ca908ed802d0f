/* ************************************************************************ **
** This file is part of spatial, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */


// End-to-end checks through the facade crate.

#[macro_use]
extern crate spatial_assert_close;

use spatial::{V3, V4, M33, M44, Context3, Context4, Tolerances};
use spatial::{PM33, PM44, PV3, PV4};
use spatial::{Direct, DirectRef};

fn init_logger() {
    let _ = env_logger::try_init();
}

fn scenario_a() -> M33<f64> {
    M33::from_rows([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [7.0, 8.0, 9.0],
    ])
}

#[test]
fn matrix_squared() {
    let a = scenario_a();
    let expected = M33::from_rows([
        [ 30.0,  36.0,  42.0],
        [ 66.0,  81.0,  96.0],
        [102.0, 126.0, 150.0],
    ]);

    assert_eq!(expected, &a * &a);

    let mut out = M33::zero();
    assert_eq!(&expected, M33::mul_into(&a, &a, &mut out));

    let mut acc = a;
    acc.mul_in_place(&a);
    assert_eq!(expected, acc);

    // every domain agrees
    let ai = M33::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    assert_eq!(expected.map(|x| x as i32), &ai * &ai);
    assert_eq!(expected.map(|x| x as i64), &ai.map(i64::from) * &ai.map(i64::from));
    assert_eq!(expected.map(|x| x as f32), &ai.map(|x| x as f32) * &ai.map(|x| x as f32));
}

#[test]
fn diagonal_inverse_and_singular_zero() {
    init_logger();
    let ctx = &mut Context3::new();

    let m = M33::from_rows([
        [2.0, 0.0, 0.0],
        [0.0, 2.0, 0.0],
        [0.0, 0.0, 2.0],
    ]);
    let half = M33::from_rows([
        [0.5, 0.0, 0.0],
        [0.0, 0.5, 0.0],
        [0.0, 0.0, 0.5],
    ]);
    assert_eq!(Some(half), m.inv(ctx));

    let mut out = M33::eye();
    assert!(!M33::inv_into(ctx, &M33::zero(), &mut out));
    assert_eq!(M33::eye(), out);

    let ctx = &mut Context3::<f32>::new();
    assert_eq!(None, M33::<f32>::zero().inv(ctx));
}

#[test]
fn matrix_times_vector() {
    let ctx = &mut Context3::new();
    let v = V3([1.0, 2.0, 3.0]);
    let mut out = V3::zero();
    M33::mul_vec(ctx, &scenario_a(), &v, &mut out);
    assert_eq!(V3([14.0, 32.0, 50.0]), out);
    assert_eq!(out, &scenario_a() * &v);
}

#[test]
fn composed_spaces() {
    enum SpaceA {}
    enum SpaceB {}
    enum SpaceC {}

    let a_to_b: PM33<f64, SpaceA, SpaceB> = PM33::new(scenario_a());
    let b_to_c: PM33<f64, SpaceB, SpaceC> = PM33::new(M33::eye() * 2.0);
    let a_to_c: PM33<f64, SpaceA, SpaceC> = a_to_b.then(&b_to_c);
    assert_eq!(&scenario_a() * 2.0, a_to_c.untyped());

    let v: PV3<f64, SpaceA> = PV3::new(V3([1.0, 2.0, 3.0]));
    let w: PV3<f64, SpaceC> = &a_to_c * &v;
    assert_eq!(V3([28.0, 64.0, 100.0]), w.untyped());
}

#[test]
fn camera_pipeline() {
    enum Model {}
    enum World {}
    enum View {}
    enum Clip {}

    let ctx = &mut Context4::new();
    let model: PM44<f64, Model, World> = PM44::new(M44::translation(&V3([0.0, 0.0, -5.0])));
    let view: PM44<f64, World, View> = PM44::new(M44::look_at(
        &V3([0.0, 0.0, 5.0]),
        &V3([0.0, 0.0, 0.0]),
        &V3([0.0, 1.0, 0.0]),
    ));
    let proj: PM44<f64, View, Clip> = PM44::new(M44::perspective(std::f64::consts::PI / 2.0, 1.0, 1.0, 100.0));

    let model_to_clip: PM44<f64, Model, Clip> = model.then(&view).then(&proj);

    // the model origin ends up 10 units in front of the camera, centered
    let origin: PV4<f64, Model> = PV4::new(V4([0.0, 0.0, 0.0, 1.0]));
    let mut clip = PV4::<f64, Clip>::zero();
    PM44::mul_vec(ctx, &model_to_clip, &origin, &mut clip);
    let V4([x, y, z, w]) = clip.untyped();
    assert_close!(abs=1e-12, 10.0, w);
    assert_close!(abs=1e-12, [0.0, 0.0], [x / w, y / w]);
    assert!(-1.0 < z / w && z / w < 1.0);

    let clip_to_model = model_to_clip.inv(ctx).unwrap();
    let back = &clip_to_model * &clip;
    assert!(back.approx_eq(&origin, Tolerances::abs(1e-9)));
}

#[test]
fn buffer_views() {
    init_logger();

    // two packed 4x4 float matrices, e.g. a uniform buffer
    let mut bytes = vec![0u8; 2 * 16 * 4];
    let m = M44::<f32>::scaling(&V3([1.0, 2.0, 3.0]));
    Direct::<M44<f32>>::at_index(&mut bytes, 1).unwrap().store(&m);

    let view = DirectRef::<M44<f32>>::at_index(&bytes, 1).unwrap();
    assert_eq!(64, view.offset());
    assert_eq!(m, view.load());
    assert_eq!(Ok(3.0), view.get_rc(2, 2));
    assert_eq!(M44::zero(), DirectRef::<M44<f32>>::at_index(&bytes, 0).unwrap().load());
    assert!(DirectRef::<M44<f32>>::at_index(&bytes, 2).is_err());
}
