//! Static site content: everything on the page that is pure presentation.
//! The booking engine never reads any of this.

pub struct BandMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
}

pub struct Show {
    pub date: &'static str,
    pub venue: &'static str,
    pub time: &'static str,
    pub kind: &'static str,
}

pub struct VideoSlide {
    pub url: &'static str,
    pub title: &'static str,
}

pub struct AudioTrack {
    pub url: &'static str,
    pub title: &'static str,
}

pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const BAND_MEMBERS: &[BandMember] = &[
    BandMember {
        name: "Ankit",
        role: "Lead Vocalist, Rhythm Guitarist",
        bio: "The soulful voice and dynamic frontman of MUSICAHOLIC द Band. With his charismatic stage presence and versatile vocals, he sets the vibe for every performance.",
        image: "/static/images/ankit-performance.jpg",
    },
    BandMember {
        name: "Shane",
        role: "Drummer, Percussionist",
        bio: "Shane drives the heartbeat of the band with his tight grooves and energetic drumming. His mastery over percussion adds a unique fusion feel to their sound.",
        image: "/static/images/shane.jpg",
    },
    BandMember {
        name: "Abhay",
        role: "Keys & Synths",
        bio: "Abhay brings a modern, ambient layer to the band's music with his keys and synths. From semi-classical textures to cinematic Bollywood sounds, he elevates every song.",
        image: "/static/images/abhay.jpg",
    },
];

pub const UPCOMING_SHOWS: &[Show] = &[
    Show {
        date: "2024-02-15",
        venue: "Phoenix Palassio, Lucknow",
        time: "7:00 PM",
        kind: "Live Concert",
    },
    Show {
        date: "2024-02-28",
        venue: "Gomti Riverfront, Lucknow",
        time: "6:30 PM",
        kind: "Sufi Night",
    },
    Show {
        date: "2024-03-10",
        venue: "La Martiniere College, Lucknow",
        time: "5:00 PM",
        kind: "College Fest",
    },
];

pub const VIDEO_SLIDES: &[VideoSlide] = &[
    VideoSlide { url: "/static/video/shows/1.mp4", title: "Sufi Night Extravaganza" },
    VideoSlide { url: "/static/video/shows/2.mp4", title: "Bollywood Mashup Medley" },
    VideoSlide { url: "/static/video/shows/3.mp4", title: "Rock Fusion Spectacular" },
    VideoSlide { url: "/static/video/shows/4.mp4", title: "Acoustic Unplugged Session" },
    VideoSlide { url: "/static/video/shows/5.mp4", title: "Electrifying Live Performance" },
    VideoSlide { url: "/static/video/shows/6.mp4", title: "QVI6 - Special Performance" },
];

pub const AUDIO_TRACKS: &[AudioTrack] = &[
    AudioTrack { url: "/static/audio/Project_6.mp3", title: "Project 6" },
    AudioTrack { url: "/static/audio/untitled.mp3", title: "Untitled" },
];

pub const GALLERY_IMAGES: &[GalleryImage] = &[
    GalleryImage { src: "/static/images/ankit-acoustic.jpg", alt: "Performance 1" },
    GalleryImage { src: "/static/images/ankit-stage.jpg", alt: "Performance 2" },
    GalleryImage { src: "/static/images/ankit-performance.jpg", alt: "Performance 3" },
    GalleryImage { src: "/static/images/abhay.jpg", alt: "Performance 4" },
    GalleryImage { src: "/static/images/shane.jpg", alt: "Performance 5" },
    GalleryImage { src: "/static/images/ankit-acoustic.jpg", alt: "Performance 6" },
];
