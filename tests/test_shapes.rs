use shapes::fp;
use shapes::oop::shape::{Circle, Rectangle, RightTriangle, Shape};

const TOLERANCE: f64 = 1e-6;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {} but got {}",
        expected,
        actual
    );
}

#[test]
fn test_reference_shapes() {
    let rectangle = Rectangle::new(10.0, 5.0);
    assert_eq!(rectangle.area(), 50.0);
    assert_eq!(rectangle.perimeter(), 30.0);

    let circle = Circle::new(10.0);
    assert_close(circle.area(), 314.159265);
    assert_close(circle.perimeter(), 62.831853);

    let triangle = RightTriangle::new(10.0, 5.0);
    assert_eq!(triangle.area(), 25.0);
    assert_close(triangle.perimeter(), 10.0 + 5.0 + 125f64.sqrt());
    assert_close(triangle.perimeter(), 26.180340);
}

#[test]
fn test_area_with_interface() {
    let cases: Vec<(&str, Box<dyn Shape>, f64)> = vec![
        ("Rectangle", Box::new(Rectangle::new(12.0, 6.0)), 72.0),
        ("Circle", Box::new(Circle::new(10.0)), 314.1592653589793),
        ("Triangle", Box::new(RightTriangle::new(12.0, 6.0)), 36.0),
    ];
    for (name, shape, expected) in cases {
        assert_eq!(shape.area(), expected, "{}", name);
    }
}

#[test]
fn test_example_rectangle_area() {
    assert_eq!(Rectangle::new(3.0, 4.0).area(), 12.0);
}

#[test]
fn test_dispatch_is_transparent() {
    let rectangle = Rectangle::new(7.5, 2.0);
    let circle = Circle::new(3.25);
    let triangle = RightTriangle::new(6.0, 8.0);

    let dynamic: [&dyn Shape; 3] = [&rectangle, &circle, &triangle];
    let direct = [
        (rectangle.area(), rectangle.perimeter()),
        (circle.area(), circle.perimeter()),
        (triangle.area(), triangle.perimeter()),
    ];
    for (shape, (area, perimeter)) in dynamic.iter().zip(direct) {
        assert_eq!(shape.area(), area);
        assert_eq!(shape.perimeter(), perimeter);
    }

    let tagged: [fp::shape::Shape; 3] = [rectangle.into(), circle.into(), triangle.into()];
    for (shape, (area, perimeter)) in tagged.iter().zip(direct) {
        assert_eq!(fp::shape::area(shape), area);
        assert_eq!(fp::shape::perimeter(shape), perimeter);
        let as_dyn: &dyn Shape = shape;
        assert_eq!(as_dyn.area(), area);
    }
}

#[test]
fn test_right_triangle_3_4_5() {
    let triangle = RightTriangle::new(3.0, 4.0);
    assert_eq!(triangle.hypotenuse(), 5.0);
    assert_eq!(triangle.perimeter(), 12.0);
    assert_eq!(triangle.area(), 6.0);
}

#[test]
fn test_total_area_agrees() {
    let dynamic = shapes::oop::shape::demo();
    let tagged = fp::shape::demo();
    assert_eq!(
        shapes::oop::shape::total_area(&dynamic),
        fp::shape::total_area(&tagged)
    );
}
