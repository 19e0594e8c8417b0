use rand::Rng;
use serde::Serialize;

/// Fares under this amount get a "too expensive" remark.
pub const CHEAP_THRESHOLD: f64 = 10.0;

pub const TOO_EXPENSIVE: [&str; 2] = [
    "Oh papa ! C'est trop cher ! Marche avec les pieds !",
    "Oh le sang, c'est moins cher d'acheter un petit Piaggio !",
];

pub const CHEAP_ENOUGH: [&str; 2] = [
    "Hééé Vazy Harpagon ! Lache les belins !",
    "Hééé Frero ! Paye le Taxi, je paye le Pastis !",
];

pub const IMAGES: [&str; 3] = ["images/Rene.png", "images/Bengous.png", "images/JuL.png"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommentChoice {
    pub text: &'static str,
    pub image: &'static str,
}

pub fn select_comment<R: Rng + ?Sized>(fare: f64, rng: &mut R) -> CommentChoice {
    let image = pick(&IMAGES, rng);

    let pool = if fare < CHEAP_THRESHOLD {
        &TOO_EXPENSIVE
    } else {
        &CHEAP_ENOUGH
    };

    CommentChoice {
        text: pick(pool, rng),
        image,
    }
}

fn pick<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool[rng.gen_range(0..pool.len())]
}
