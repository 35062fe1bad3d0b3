//! User-facing text.
//!
//! Data screens speak Indonesian; the login/register notices are English.

/// Shown whenever a data page is reached without a bearer token.
pub const LOGIN_REQUIRED: &str = "Anda harus login";
pub const LOADING: &str = "Memuat...";
pub const REDIRECTING: &str = "Mengalihkan...";

pub const LOGIN_FAILED: &str = "Username or password is wrong";
pub const REGISTER_SUCCEEDED: &str = "User successfully registered";
pub const REGISTER_FAILED: &str = "Username or email already registered";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const USERNAME_REQUIRED: &str = "Username is required.";

pub const PROFILE_LOADING: &str = "Memuat profil...";
pub const PROFILE_LOAD_FAILED: &str = "Gagal mengambil data profile";

pub const POST_FIELDS_REQUIRED: &str = "Judul, konten, dan kategori harus diisi";
pub const POST_DELETE_CONFIRM: &str = "Yakin ingin menghapus post ini?";

/// Per-resource wording for the list/create/update/delete flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceMessages {
    pub missing_session: &'static str,
    pub load_failed: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
    pub name_required: &'static str,
    pub empty: &'static str,
}

pub const TAG_MESSAGES: ResourceMessages = ResourceMessages {
    missing_session: LOGIN_REQUIRED,
    load_failed: "Gagal memuat tags",
    create_failed: "Gagal membuat tag",
    update_failed: "Gagal update tag",
    delete_failed: "Gagal menghapus tag",
    name_required: "Nama tag harus diisi",
    empty: "Tidak ada tags",
};

pub const CATEGORY_MESSAGES: ResourceMessages = ResourceMessages {
    missing_session: LOGIN_REQUIRED,
    load_failed: "Gagal memuat kategori",
    create_failed: "Gagal membuat kategori",
    update_failed: "Gagal update kategori",
    delete_failed: "Gagal menghapus kategori",
    name_required: "Nama kategori harus diisi",
    empty: "Tidak ada kategori",
};

pub const POST_MESSAGES: ResourceMessages = ResourceMessages {
    missing_session: LOGIN_REQUIRED,
    load_failed: "Gagal memuat posts",
    create_failed: "Gagal menambahkan post",
    update_failed: "Gagal memperbarui post",
    delete_failed: "Gagal menghapus post",
    name_required: POST_FIELDS_REQUIRED,
    empty: "Tidak ada post",
};

/// Wording for the read-only feed screens.
pub const FEED_MESSAGES: ResourceMessages = ResourceMessages {
    missing_session: "Anda harus login untuk melihat postingan",
    load_failed: "Gagal memuat postingan",
    empty: "Belum ada postingan",
    ..POST_MESSAGES
};
